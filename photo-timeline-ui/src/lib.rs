//! Phần DOM của timeline ảnh: thẻ tuần, lightbox, banner lỗi.

#[cfg(target_arch = "wasm32")]
mod banner;
#[cfg(target_arch = "wasm32")]
mod cards;
#[cfg(target_arch = "wasm32")]
mod lightbox;
mod once;
#[cfg(target_arch = "wasm32")]
mod styles;

#[cfg(target_arch = "wasm32")]
pub use banner::{render_counts, render_error};
#[cfg(target_arch = "wasm32")]
pub use cards::{clear_container, render_section};
#[cfg(target_arch = "wasm32")]
pub use lightbox::{install_lightbox, DomSurface, SharedLightbox};
pub use once::{bind_once, BindingMarker, LIGHTBOX_BOUND_ATTR};
#[cfg(target_arch = "wasm32")]
pub use styles::ensure_styles;

/// Selector lưới ảnh của một tuần; phạm vi điều hướng của lightbox.
pub const PHOTO_GRID_SELECTOR: &str = ".photos-grid";
/// Ảnh nằm trong lưới, đích của click ủy quyền.
pub const GRID_IMAGE_SELECTOR: &str = ".photos-grid img";

#[cfg(target_arch = "wasm32")]
mod wasm_ui {
    use wasm_bindgen::prelude::*;
    use web_sys::Document;

    /// Gắn lightbox cho trang đã có sẵn lưới ảnh.
    ///
    /// Trả về `false` nếu không có overlay hoặc overlay đã được gắn trước đó
    /// (ví dụ bởi `start_timeline`).
    #[wasm_bindgen]
    pub fn mount_lightbox(overlay_id: &str) -> Result<bool, JsValue> {
        let document: Document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| JsValue::from_str("Không truy cập được document"))?;

        crate::styles::ensure_styles(&document)?;
        Ok(crate::lightbox::install_lightbox(&document, overlay_id)?.is_some())
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm_ui::mount_lightbox;

#[cfg(not(target_arch = "wasm32"))]
pub fn mount_lightbox(_: &str) -> Result<bool, wasm_bindgen::JsValue> {
    Err(wasm_bindgen::JsValue::from_str(
        "photo-timeline-ui chỉ hỗ trợ biên dịch target wasm32",
    ))
}
