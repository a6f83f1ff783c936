#![cfg(target_arch = "wasm32")]

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Node};

const STYLE_TAG_SELECTOR: &str = "style[data-photo-timeline]";

/// CSS mặc định cho thẻ tuần, lưới ảnh, lightbox và banner; ghi đè qua các biến `--pt-*`.
pub const DEFAULT_STYLES: &str = r#"
:root {
  --pt-font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
  --pt-card-bg: #ffffff;
  --pt-card-border: rgba(148, 163, 184, 0.3);
  --pt-radius: 14px;
  --pt-text: #1f2933;
  --pt-muted: #52606d;
  --pt-accent: #d6336c;
  --pt-overlay-bg: rgba(10, 10, 14, 0.92);
  --pt-error-bg: #fff3f6;
  --pt-error-border: #f5d1df;
}

.week-card {
  font-family: var(--pt-font-family);
  color: var(--pt-text);
  background: var(--pt-card-bg);
  border: 1px solid var(--pt-card-border);
  border-radius: var(--pt-radius);
  padding: 18px 20px;
  margin-bottom: 18px;
  animation: pt-fade-up 0.5s ease both;
}

@keyframes pt-fade-up {
  from { opacity: 0; transform: translateY(12px); }
  to { opacity: 1; transform: none; }
}

.week-card-header {
  display: flex;
  align-items: baseline;
  justify-content: space-between;
  gap: 12px;
}

.week-title {
  margin: 0;
  font-size: 1.15rem;
  color: var(--pt-accent);
}

.week-dates {
  font-size: 0.85rem;
  color: var(--pt-muted);
  font-variant-numeric: tabular-nums;
}

.comment {
  margin: 10px 0 0;
  line-height: 1.5;
  white-space: pre-line;
}

.photos-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(120px, 1fr));
  gap: 8px;
  margin-top: 14px;
}

.photos-grid img {
  width: 100%;
  aspect-ratio: 1 / 1;
  object-fit: cover;
  border-radius: 8px;
  cursor: zoom-in;
}

.lightbox {
  position: fixed;
  inset: 0;
  z-index: 1000;
  display: flex;
  align-items: center;
  justify-content: center;
  background: var(--pt-overlay-bg);
}

.lightbox[hidden] {
  display: none;
}

.lightbox-image {
  max-width: 92vw;
  max-height: 88vh;
  object-fit: contain;
  border-radius: 6px;
}

.lightbox-close,
.lightbox-prev,
.lightbox-next {
  position: absolute;
  border: none;
  background: rgba(255, 255, 255, 0.12);
  color: #ffffff;
  font-size: 1.6rem;
  width: 44px;
  height: 44px;
  border-radius: 999px;
  cursor: pointer;
}

.lightbox-close { top: 18px; right: 18px; }
.lightbox-prev { left: 18px; top: 50%; transform: translateY(-50%); }
.lightbox-next { right: 18px; top: 50%; transform: translateY(-50%); }

.timeline-error {
  font-family: var(--pt-font-family);
  background: var(--pt-error-bg);
  border: 1px solid var(--pt-error-border);
  padding: 12px 16px;
  border-radius: 8px;
  margin-bottom: 16px;
}

@media (max-width: 600px) {
  .photos-grid {
    grid-template-columns: repeat(3, 1fr);
  }

  .week-card-header {
    flex-direction: column;
    align-items: flex-start;
  }
}
"#;

pub fn ensure_styles(document: &Document) -> Result<(), JsValue> {
    if document.query_selector(STYLE_TAG_SELECTOR)?.is_some() {
        return Ok(());
    }

    let head = document
        .head()
        .ok_or_else(|| JsValue::from_str("Document không có thẻ <head>"))?;

    let style_el = document.create_element("style")?;
    style_el.set_attribute("data-photo-timeline", "v1")?;
    style_el.set_text_content(Some(DEFAULT_STYLES));
    head.append_child(&style_el.clone().dyn_into::<Node>()?)?;

    Ok(())
}
