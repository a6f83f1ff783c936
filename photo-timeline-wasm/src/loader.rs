use photo_timeline_core::{LoadError, TimelineDocument};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestCache, RequestInit, Response};

/// Tải `timeline.json` một lần, luôn bỏ qua cache; không thử lại.
pub async fn load(resource_url: &str) -> Result<TimelineDocument, LoadError> {
    let window = web_sys::window()
        .ok_or_else(|| LoadError::NetworkOrHttp("không có window".to_string()))?;

    let init = RequestInit::new();
    init.set_method("GET");
    init.set_cache(RequestCache::NoStore);
    let request = Request::new_with_str_and_init(resource_url, &init).map_err(transport)?;

    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(transport)?
        .dyn_into()
        .map_err(transport)?;
    LoadError::check_status(response.status())?;

    let body = JsFuture::from(response.text().map_err(transport)?)
        .await
        .map_err(transport)?
        .as_string()
        .ok_or_else(|| LoadError::MalformedBody("body không phải chuỗi".to_string()))?;

    TimelineDocument::parse(&body)
}

fn transport(err: JsValue) -> LoadError {
    LoadError::NetworkOrHttp(format!("{err:?}"))
}
