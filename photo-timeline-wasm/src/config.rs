use photo_timeline_core::{Section, ViewerConfig};
use serde::Deserialize;
#[cfg(target_arch = "wasm32")]
use serde_wasm_bindgen::from_value;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

/// Cấu hình một phần từ JavaScript; trường nào thiếu thì lấy mặc định.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsViewerConfig {
    #[serde(default)]
    resource_path: Option<String>,
    #[serde(default)]
    section_filter: Option<String>,
    #[serde(default)]
    photo_base: Option<String>,
    #[serde(default)]
    banner_selector: Option<String>,
    #[serde(default)]
    template_id: Option<String>,
    #[serde(default)]
    overlay_id: Option<String>,
    #[serde(default)]
    section_container_id: Option<String>,
}

impl TryFrom<JsViewerConfig> for ViewerConfig {
    type Error = String;

    fn try_from(cfg: JsViewerConfig) -> Result<Self, Self::Error> {
        let mut base = match cfg.section_filter.as_deref() {
            Some(value) => ViewerConfig::for_section(value.parse::<Section>()?),
            None => ViewerConfig::default(),
        };

        if let Some(path) = cfg.resource_path {
            base.resource_path = path;
        }
        if let Some(photo_base) = cfg.photo_base {
            base.photo_base = photo_base;
        }
        if let Some(selector) = cfg.banner_selector {
            base.banner_selector = selector;
        }
        if let Some(id) = cfg.template_id {
            base.template_id = id;
        }
        if let Some(id) = cfg.overlay_id {
            base.overlay_id = id;
        }
        if let Some(id) = cfg.section_container_id {
            base.section_container_id = id;
        }
        Ok(base)
    }
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn decode_config(config: Option<JsValue>) -> Result<ViewerConfig, JsValue> {
    let Some(js_cfg) = config.filter(|value| !value.is_undefined() && !value.is_null()) else {
        return Ok(ViewerConfig::default());
    };

    let cfg: JsViewerConfig = from_value(js_cfg)
        .map_err(|err| JsValue::from_str(&format!("Không đọc được config: {err}")))?;
    ViewerConfig::try_from(cfg).map_err(|err| JsValue::from_str(&err))
}
