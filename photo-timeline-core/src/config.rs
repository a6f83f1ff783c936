use serde::{Deserialize, Serialize};

use crate::model::Section;

/// Cấu hình trang hiển thị: tài nguyên cần tải và các điểm gắn trên DOM.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewerConfig {
    /// Đường dẫn tới `timeline.json`, tương đối so với trang.
    pub resource_path: String,
    /// Chỉ hiển thị một section (trang theo section) thay vì cả hai.
    pub section_filter: Option<Section>,
    /// Tiền tố ghép vào đường dẫn ảnh.
    pub photo_base: String,
    /// Selector của phần tử nhận banner lỗi.
    pub banner_selector: String,
    pub template_id: String,
    pub overlay_id: String,
    /// Container duy nhất khi có `section_filter`.
    pub section_container_id: String,
}

/// Nơi render một section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionMount {
    pub section: Section,
    pub container_id: String,
    /// Xóa nội dung cũ của container trước khi render.
    pub replace_existing: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            resource_path: "../timeline.json".to_string(),
            section_filter: None,
            photo_base: "../".to_string(),
            banner_selector: ".container".to_string(),
            template_id: "week-item-template".to_string(),
            overlay_id: "lightbox".to_string(),
            section_container_id: "timeline".to_string(),
        }
    }
}

impl ViewerConfig {
    /// Trang chỉ hiển thị một section, đặt cạnh `timeline.json`.
    pub fn for_section(section: Section) -> Self {
        Self {
            resource_path: "./timeline.json".to_string(),
            section_filter: Some(section),
            photo_base: "./".to_string(),
            banner_selector: ".timeline-container".to_string(),
            ..Self::default()
        }
    }

    pub fn mounts(&self) -> Vec<SectionMount> {
        match self.section_filter {
            Some(section) => vec![SectionMount {
                section,
                container_id: self.section_container_id.clone(),
                replace_existing: true,
            }],
            None => Section::ALL
                .into_iter()
                .map(|section| SectionMount {
                    section,
                    container_id: section.container_id().to_string(),
                    replace_existing: false,
                })
                .collect(),
        }
    }
}
