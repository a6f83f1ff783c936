use photo_timeline_core::{weeks_label, Section, SectionCounts};
use wasm_bindgen::JsValue;
use web_sys::{console, Document, Element};

/// Chèn banner lỗi lên đầu phần tử `selector` (hoặc `<body>` nếu không tìm thấy).
pub fn render_error(document: &Document, selector: &str, message: &str) -> Result<(), JsValue> {
    let mount: Element = match document.query_selector(selector)? {
        Some(mount) => mount,
        None => match document.body() {
            Some(body) => body.into(),
            None => {
                console::error_1(&JsValue::from_str(message));
                return Ok(());
            }
        },
    };

    let banner = document.create_element("div")?;
    banner.set_class_name("timeline-error");
    banner.set_text_content(Some(message));
    mount.prepend_with_node_1(&banner)?;
    Ok(())
}

/// Ghi "N semanas" vào các ô đếm của trang landing, nếu có.
pub fn render_counts(document: &Document, counts: SectionCounts) {
    for section in Section::ALL {
        if let Some(slot) = document.get_element_by_id(section.count_id()) {
            slot.set_text_content(Some(&weeks_label(counts.get(section))));
        }
    }
}
