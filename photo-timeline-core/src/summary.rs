use crate::model::{Section, TimelineDocument};

/// Số tuần của mỗi section, dùng cho trang landing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionCounts {
    pub pre: usize,
    pub post: usize,
}

impl SectionCounts {
    pub fn from_document(document: &TimelineDocument) -> Self {
        Self {
            pre: document.pre.len(),
            post: document.post.len(),
        }
    }

    pub fn get(&self, section: Section) -> usize {
        match section {
            Section::Pre => self.pre,
            Section::Post => self.post,
        }
    }
}

pub fn weeks_label(count: usize) -> String {
    format!("{count} semanas")
}
