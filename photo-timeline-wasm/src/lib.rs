//! Bridge WASM <-> JavaScript: tải `timeline.json` và dựng trang.

mod config;
#[cfg(target_arch = "wasm32")]
mod loader;
#[cfg(target_arch = "wasm32")]
mod page;

pub use config::JsViewerConfig;

#[cfg(target_arch = "wasm32")]
mod bindings {
    use wasm_bindgen::prelude::*;

    use crate::config::decode_config;
    use crate::page;

    /// Khởi động trang timeline. `config` là object tùy chọn (camelCase) ghi đè mặc định.
    #[wasm_bindgen]
    pub async fn start_timeline(config: Option<JsValue>) -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        let config = decode_config(config)?;
        page::start(config).await
    }

    /// Điền số tuần vào `#pre-count` / `#post-count` của trang landing.
    #[wasm_bindgen]
    pub async fn load_counts(config: Option<JsValue>) -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        let config = decode_config(config)?;
        page::show_counts(config).await
    }
}

#[cfg(target_arch = "wasm32")]
pub use bindings::{load_counts, start_timeline};
