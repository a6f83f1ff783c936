use std::cell::RefCell;
use std::rc::Rc;

use photo_timeline_core::{Direction, Lightbox, LightboxSurface};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    console, Document, Element, Event, EventTarget, HtmlElement, HtmlImageElement, KeyboardEvent,
    Node,
};

use crate::{
    bind_once, BindingMarker, GRID_IMAGE_SELECTOR, LIGHTBOX_BOUND_ATTR, PHOTO_GRID_SELECTOR,
};

pub type SharedLightbox = Rc<RefCell<Lightbox<DomSurface>>>;

/// Overlay thật trên trang.
pub struct DomSurface {
    overlay: HtmlElement,
    image: HtmlImageElement,
    body: Option<HtmlElement>,
}

impl LightboxSurface for DomSurface {
    fn show_image(&mut self, src: &str) {
        self.image.set_src(src);
    }

    fn clear_image(&mut self) {
        if let Err(err) = self.image.remove_attribute("src") {
            console::warn_1(&err);
        }
    }

    fn set_visible(&mut self, visible: bool) {
        self.overlay.set_hidden(!visible);
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        let Some(body) = &self.body else {
            return;
        };
        let style = body.style();
        let result = if locked {
            style.set_property("overflow", "hidden")
        } else {
            style.remove_property("overflow").map(|_| ())
        };
        if let Err(err) = result {
            console::warn_1(&err);
        }
    }
}

impl BindingMarker for HtmlElement {
    fn is_bound(&self) -> bool {
        self.has_attribute(LIGHTBOX_BOUND_ATTR)
    }

    fn mark_bound(&self) {
        if let Err(err) = self.set_attribute(LIGHTBOX_BOUND_ATTR, "") {
            console::warn_1(&err);
        }
    }
}

/// Gắn lightbox vào overlay `overlay_id`, mỗi overlay một lần.
///
/// Không có overlay, thiếu `.lightbox-image` hoặc overlay đã được gắn thì trả về `None`.
pub fn install_lightbox(
    document: &Document,
    overlay_id: &str,
) -> Result<Option<SharedLightbox>, JsValue> {
    let Some(overlay) = document.get_element_by_id(overlay_id) else {
        return Ok(None);
    };
    let overlay: HtmlElement = overlay.dyn_into()?;

    bind_once(&overlay, || attach(document, &overlay))
}

fn attach(document: &Document, overlay: &HtmlElement) -> Result<Option<SharedLightbox>, JsValue> {
    let Some(image) = overlay.query_selector(".lightbox-image")? else {
        console::warn_1(&JsValue::from_str("Lightbox thiếu .lightbox-image, bỏ qua"));
        return Ok(None);
    };
    let image: HtmlImageElement = image.dyn_into()?;

    let lightbox: SharedLightbox = Rc::new(RefCell::new(Lightbox::new(DomSurface {
        overlay: overlay.clone(),
        image,
        body: document.body(),
    })));

    // Một listener duy nhất ở document cho mọi ảnh, kể cả ảnh thêm sau.
    listen(document, "click", {
        let lightbox = lightbox.clone();
        move |event: Event| {
            if let Some((sources, clicked)) = grid_hit(&event) {
                lightbox.borrow_mut().open_at(sources, &clicked);
            }
        }
    })?;

    bind_control(overlay, ".lightbox-close", &lightbox, |lb| lb.close())?;
    bind_control(overlay, ".lightbox-prev", &lightbox, |lb| {
        lb.advance(Direction::Previous)
    })?;
    bind_control(overlay, ".lightbox-next", &lightbox, |lb| {
        lb.advance(Direction::Next)
    })?;

    listen(overlay, "click", {
        let lightbox = lightbox.clone();
        let background: Node = overlay.clone().into();
        move |event: Event| {
            let on_background = event
                .target()
                .and_then(|target| target.dyn_into::<Node>().ok())
                .map(|node| background.is_same_node(Some(&node)))
                .unwrap_or(false);
            if on_background {
                lightbox.borrow_mut().close();
            }
        }
    })?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("Không có window"))?;
    listen(&window, "keydown", {
        let lightbox = lightbox.clone();
        move |event: Event| {
            let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            if lightbox.borrow_mut().handle_key(&key_event.key()) {
                key_event.prevent_default();
            }
        }
    })?;

    Ok(Some(lightbox))
}

/// Ảnh được bấm nằm trong lưới: trả về toàn bộ ảnh cùng lưới và ảnh được bấm.
fn grid_hit(event: &Event) -> Option<(Vec<String>, String)> {
    let target: Element = event.target()?.dyn_into().ok()?;
    if !target.matches(GRID_IMAGE_SELECTOR).unwrap_or(false) {
        return None;
    }
    let grid = target.closest(PHOTO_GRID_SELECTOR).ok()??;
    let images = grid.query_selector_all("img").ok()?;

    let sources = (0..images.length())
        .filter_map(|i| images.item(i))
        .filter_map(|node| node.dyn_into::<HtmlImageElement>().ok())
        .map(|img| img.src())
        .collect();
    let clicked = target.dyn_into::<HtmlImageElement>().ok()?.src();

    Some((sources, clicked))
}

fn bind_control(
    overlay: &HtmlElement,
    selector: &str,
    lightbox: &SharedLightbox,
    action: fn(&mut Lightbox<DomSurface>),
) -> Result<(), JsValue> {
    let Some(control) = overlay.query_selector(selector)? else {
        console::warn_1(&JsValue::from_str(&format!("Lightbox thiếu {selector}")));
        return Ok(());
    };

    let lightbox = lightbox.clone();
    listen(&control, "click", move |_: Event| {
        action(&mut lightbox.borrow_mut());
    })
}

fn listen<F>(target: &EventTarget, kind: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
    // Listener sống cùng trang.
    closure.forget();
    Ok(())
}
