use photo_timeline_core::{MountedCards, PagePlan, SectionCounts, ViewerConfig};
use photo_timeline_ui::{
    clear_container, ensure_styles, install_lightbox, render_counts, render_error,
    render_section,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{console, Document, HtmlTemplateElement};

use crate::loader;

pub fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .ok_or_else(|| JsValue::from_str("Không có window"))?
        .document()
        .ok_or_else(|| JsValue::from_str("Không truy cập được document"))
}

/// Trình tự khởi động trang: tải dữ liệu, render thẻ, gắn lightbox.
///
/// Lỗi tải được chuyển thành banner; không ném ngược ra JavaScript.
pub async fn start(config: ViewerConfig) -> Result<(), JsValue> {
    let document = document()?;
    if let Err(err) = ensure_styles(&document) {
        console::warn_1(&err);
    }

    let loaded = loader::load(&config.resource_path).await;
    if let Err(err) = &loaded {
        console::error_1(&JsValue::from_str(&err.to_string()));
    }

    match PagePlan::from_load(&config, &loaded) {
        PagePlan::Banner(text) => {
            if let Err(err) = render_error(&document, &config.banner_selector, text) {
                console::error_1(&err);
            }
        }
        PagePlan::Render(mounted) => {
            render_timeline(&document, &config, &mounted)?;
            if let Err(err) = install_lightbox(&document, &config.overlay_id) {
                console::error_1(&err);
            }
        }
    }
    Ok(())
}

fn render_timeline(
    document: &Document,
    config: &ViewerConfig,
    mounted: &[MountedCards],
) -> Result<(), JsValue> {
    let template = document
        .get_element_by_id(&config.template_id)
        .and_then(|el| el.dyn_into::<HtmlTemplateElement>().ok());

    for MountedCards { mount, cards } in mounted {
        let Some(container) = document.get_element_by_id(&mount.container_id) else {
            continue;
        };
        if mount.replace_existing {
            clear_container(&container);
        }
        render_section(document, &container, template.as_ref(), cards)?;
    }
    Ok(())
}

/// Trang landing: chỉ ghi số tuần của mỗi section.
pub async fn show_counts(config: ViewerConfig) -> Result<(), JsValue> {
    let document = document()?;
    match loader::load(&config.resource_path).await {
        Ok(timeline) => render_counts(&document, SectionCounts::from_document(&timeline)),
        Err(err) => console::warn_1(&JsValue::from_str(&format!(
            "No se pudo cargar timeline.json: {err}"
        ))),
    }
    Ok(())
}
