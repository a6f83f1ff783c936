use photo_timeline_core::WeekCard;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, DocumentFragment, Element, HtmlElement, HtmlImageElement, HtmlTemplateElement, Node,
};

/// Thêm thẻ vào cuối `container` theo thứ tự của `cards`; không xóa nội dung cũ.
///
/// Có template thì nhân bản template, không thì dựng cấu trúc thẻ mặc định.
pub fn render_section(
    document: &Document,
    container: &Element,
    template: Option<&HtmlTemplateElement>,
    cards: &[WeekCard],
) -> Result<(), JsValue> {
    for card in cards {
        let node: Node = match template {
            Some(template) => from_template(document, template, card)?.into(),
            None => build_card(document, card)?.into(),
        };
        container.append_child(&node)?;
    }
    Ok(())
}

pub fn clear_container(container: &Element) {
    container.set_text_content(None);
}

fn from_template(
    document: &Document,
    template: &HtmlTemplateElement,
    card: &WeekCard,
) -> Result<DocumentFragment, JsValue> {
    let fragment: DocumentFragment = template.content().clone_node_with_deep(true)?.dyn_into()?;

    set_slot_text(&fragment, ".week-title", &card.title)?;
    set_slot_text(&fragment, ".week-dates", &card.dates)?;
    set_slot_text(&fragment, ".comment", card.comment.as_deref().unwrap_or(""))?;

    if let Some(grid) = fragment.query_selector(crate::PHOTO_GRID_SELECTOR)? {
        fill_grid(document, &grid, card)?;
    }
    if let Some(root) = fragment.first_element_child() {
        apply_delay(&root, card)?;
    }

    Ok(fragment)
}

fn set_slot_text(fragment: &DocumentFragment, selector: &str, text: &str) -> Result<(), JsValue> {
    if let Some(slot) = fragment.query_selector(selector)? {
        slot.set_text_content(Some(text));
    }
    Ok(())
}

fn build_card(document: &Document, card: &WeekCard) -> Result<Element, JsValue> {
    let root = element(document, "div", "week-card")?;
    apply_delay(&root, card)?;

    let header = element(document, "div", "week-card-header")?;
    let title = element(document, "h3", "week-title")?;
    title.set_text_content(Some(&card.title));
    let dates = element(document, "div", "week-dates")?;
    dates.set_text_content(Some(&card.dates));
    header.append_child(&title)?;
    header.append_child(&dates)?;

    let content = element(document, "div", "week-content")?;
    if let Some(comment) = &card.comment {
        let paragraph = element(document, "p", "comment")?;
        paragraph.set_text_content(Some(comment));
        content.append_child(&paragraph)?;
    }
    let grid = element(document, "div", "photos-grid")?;
    fill_grid(document, &grid, card)?;
    content.append_child(&grid)?;

    root.append_child(&header)?;
    root.append_child(&content)?;
    Ok(root)
}

fn fill_grid(document: &Document, grid: &Element, card: &WeekCard) -> Result<(), JsValue> {
    for photo in &card.photos {
        let img: HtmlImageElement = document.create_element("img")?.dyn_into()?;
        img.set_attribute("loading", "lazy")?;
        img.set_alt(&photo.alt);
        img.set_src(&photo.src);
        grid.append_child(&img)?;
    }
    Ok(())
}

fn apply_delay(root: &Element, card: &WeekCard) -> Result<(), JsValue> {
    if let Some(root) = root.dyn_ref::<HtmlElement>() {
        root.style().set_property("animation-delay", &card.animation_delay)?;
    }
    Ok(())
}

fn element(document: &Document, tag: &str, class: &str) -> Result<Element, JsValue> {
    let el = document.create_element(tag)?;
    el.set_class_name(class);
    Ok(el)
}
