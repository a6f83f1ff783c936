//! Logic lõi của timeline ảnh theo tuần: dữ liệu, thẻ hiển thị và lightbox.

mod card;
mod config;
mod error;
mod lightbox;
mod model;
mod page;
mod summary;

pub use card::{
    build_cards, date_range, resolve_photo, sorted_weeks, week_title, PhotoRef, WeekCard,
};
pub use config::{SectionMount, ViewerConfig};
pub use error::{LoadError, MALFORMED_BODY_TEXT, NETWORK_FAILURE_TEXT};
pub use lightbox::{start_index, Direction, Lightbox, LightboxState, LightboxSurface};
pub use model::{Section, TimelineDocument, WeekRecord};
pub use page::{MountedCards, PagePlan};
pub use summary::{weeks_label, SectionCounts};
