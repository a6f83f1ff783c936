use crate::card::{build_cards, WeekCard};
use crate::config::{SectionMount, ViewerConfig};
use crate::error::LoadError;
use crate::model::TimelineDocument;

/// Những gì trang cần dựng sau khi tải xong.
#[derive(Debug, Clone, PartialEq)]
pub enum PagePlan {
    /// Tải lỗi: chỉ hiện banner, không có thẻ và không gắn lightbox.
    Banner(&'static str),
    /// Tải được: thẻ cho từng container, sau đó gắn lightbox.
    Render(Vec<MountedCards>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct MountedCards {
    pub mount: SectionMount,
    pub cards: Vec<WeekCard>,
}

impl PagePlan {
    pub fn from_load(
        config: &ViewerConfig,
        loaded: &Result<TimelineDocument, LoadError>,
    ) -> Self {
        match loaded {
            Err(err) => PagePlan::Banner(err.banner_text()),
            Ok(timeline) => PagePlan::Render(
                config
                    .mounts()
                    .into_iter()
                    .map(|mount| MountedCards {
                        cards: build_cards(timeline.section(mount.section), &config.photo_base),
                        mount,
                    })
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Section;
    use crate::{MALFORMED_BODY_TEXT, NETWORK_FAILURE_TEXT};

    #[test]
    fn rejected_fetch_shows_banner_only() {
        let loaded = Err(LoadError::NetworkOrHttp("TypeError: Failed to fetch".into()));
        let plan = PagePlan::from_load(&ViewerConfig::default(), &loaded);
        assert_eq!(plan, PagePlan::Banner(NETWORK_FAILURE_TEXT));
    }

    #[test]
    fn malformed_body_shows_parse_banner() {
        let loaded = TimelineDocument::parse("<!doctype html>");
        let plan = PagePlan::from_load(&ViewerConfig::for_section(Section::Pre), &loaded);
        assert_eq!(plan, PagePlan::Banner(MALFORMED_BODY_TEXT));
    }

    #[test]
    fn loaded_document_fills_every_mount() {
        let loaded = TimelineDocument::parse(
            r#"{"pre":[{"week":2,"photos":["W2/b.jpg"]},{"week":1,"photos":[]}],"post":[]}"#,
        );
        let plan = PagePlan::from_load(&ViewerConfig::default(), &loaded);

        let PagePlan::Render(mounted) = plan else {
            panic!("phải render thẻ");
        };
        assert_eq!(mounted.len(), 2);
        assert_eq!(mounted[0].mount.container_id, "pre-list");
        let weeks: Vec<i64> = mounted[0].cards.iter().map(|card| card.week).collect();
        assert_eq!(weeks, vec![1, 2]);
        assert_eq!(mounted[0].cards[1].photos[0].src, "../W2/b.jpg");
        assert!(mounted[1].cards.is_empty());
    }
}
