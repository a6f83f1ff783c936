use crate::model::WeekRecord;

const DATE_SEPARATOR: &str = " – ";
const STAGGER_SECONDS: f64 = 0.1;

/// Dữ liệu đã chuẩn bị cho một thẻ tuần.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekCard {
    pub week: i64,
    pub title: String,
    pub dates: String,
    pub comment: Option<String>,
    pub photos: Vec<PhotoRef>,
    pub animation_delay: String,
}

/// Ảnh trong lưới của thẻ.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoRef {
    pub src: String,
    pub alt: String,
}

/// Sắp xếp ổn định theo `week` tăng dần.
pub fn sorted_weeks(records: &[WeekRecord]) -> Vec<&WeekRecord> {
    let mut sorted: Vec<&WeekRecord> = records.iter().collect();
    sorted.sort_by_key(|record| record.week);
    sorted
}

pub fn week_title(week: i64) -> String {
    format!("Semana {week}")
}

/// Nối ngày bắt đầu và kết thúc; bỏ qua giá trị rỗng.
pub fn date_range(start: Option<&str>, end: Option<&str>) -> String {
    [start, end]
        .into_iter()
        .flatten()
        .filter(|value| !value.is_empty())
        .collect::<Vec<_>>()
        .join(DATE_SEPARATOR)
}

/// Ghép đường dẫn ảnh tương đối với thư mục gốc của trang.
pub fn resolve_photo(base: &str, path: &str) -> String {
    if path.starts_with('/') || path.contains("://") || path.starts_with("data:") {
        return path.to_string();
    }

    if base.is_empty() {
        return path.to_string();
    }

    let path = path.trim_start_matches("./");
    if base.ends_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}

/// Dựng thẻ cho cả một section theo đúng thứ tự hiển thị.
pub fn build_cards(records: &[WeekRecord], photo_base: &str) -> Vec<WeekCard> {
    sorted_weeks(records)
        .into_iter()
        .enumerate()
        .map(|(index, record)| build_card(record, index, photo_base))
        .collect()
}

fn build_card(record: &WeekRecord, index: usize, photo_base: &str) -> WeekCard {
    let alt = format!("Foto W{}", record.week);
    let photos = record
        .photos
        .iter()
        .map(|path| PhotoRef {
            src: resolve_photo(photo_base, path),
            alt: alt.clone(),
        })
        .collect();

    WeekCard {
        week: record.week,
        title: week_title(record.week),
        dates: date_range(record.start.as_deref(), record.end.as_deref()),
        comment: record.comment.clone().filter(|text| !text.is_empty()),
        photos,
        animation_delay: format!("{:.1}s", index as f64 * STAGGER_SECONDS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(week: i64, photos: &[&str]) -> WeekRecord {
        WeekRecord {
            week,
            photos: photos.iter().map(|p| p.to_string()).collect(),
            ..WeekRecord::default()
        }
    }

    #[test]
    fn cards_follow_week_order() {
        let cards = build_cards(&[record(3, &[]), record(1, &[]), record(2, &[])], "../");
        let titles: Vec<&str> = cards.iter().map(|card| card.title.as_str()).collect();
        assert_eq!(titles, vec!["Semana 1", "Semana 2", "Semana 3"]);
    }

    #[test]
    fn equal_weeks_keep_fetch_order() {
        let records = vec![record(2, &["first.jpg"]), record(1, &[]), record(2, &["second.jpg"])];
        let cards = build_cards(&records, "");
        assert_eq!(cards[1].photos[0].src, "first.jpg");
        assert_eq!(cards[2].photos[0].src, "second.jpg");
    }

    #[test]
    fn date_range_joins_with_en_dash() {
        assert_eq!(
            date_range(Some("2024-01-01"), Some("2024-01-07")),
            "2024-01-01 – 2024-01-07"
        );
        assert_eq!(date_range(None, Some("2024-01-07")), "2024-01-07");
        assert_eq!(date_range(Some(""), Some("")), "");
        assert_eq!(date_range(None, None), "");
    }

    #[test]
    fn photos_resolve_against_base() {
        assert_eq!(resolve_photo("../", "Pre/W1/a.jpg"), "../Pre/W1/a.jpg");
        assert_eq!(resolve_photo("./", "Pre/W1/a.jpg"), "./Pre/W1/a.jpg");
        assert_eq!(resolve_photo("media", "./a.jpg"), "media/a.jpg");
        assert_eq!(resolve_photo("../", "/abs/a.jpg"), "/abs/a.jpg");
        assert_eq!(
            resolve_photo("../", "https://cdn.example/a.jpg"),
            "https://cdn.example/a.jpg"
        );
    }

    #[test]
    fn card_fields_are_filled() {
        let mut source = record(5, &["Post/W5/x.png", "Post/W5/y.png"]);
        source.start = Some("2024-02-05".into());
        source.comment = Some(String::new());
        let cards = build_cards(&[record(1, &[]), source], "../");
        let card = &cards[1];

        assert_eq!(card.dates, "2024-02-05");
        assert_eq!(card.comment, None);
        assert_eq!(card.animation_delay, "0.1s");
        assert_eq!(card.photos.len(), 2);
        assert!(card.photos.iter().all(|photo| photo.alt == "Foto W5"));
        assert_eq!(cards[0].animation_delay, "0.0s");
    }

    #[test]
    fn record_without_photos_has_empty_grid() {
        let cards = build_cards(&[record(7, &[])], "../");
        assert!(cards[0].photos.is_empty());
    }
}
