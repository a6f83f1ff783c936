/// Thuộc tính đánh dấu overlay đã được gắn lightbox.
pub const LIGHTBOX_BOUND_ATTR: &str = "data-photo-timeline-bound";

/// Phần tử có thể mang dấu "đã gắn listener".
pub trait BindingMarker {
    fn is_bound(&self) -> bool;
    fn mark_bound(&self);
}

/// Chạy `install` một lần cho mỗi phần tử.
///
/// Đã có dấu thì trả về `Ok(None)` mà không gọi `install`; dấu chỉ được đặt khi
/// `install` trả về `Some`.
pub fn bind_once<M, T, E, F>(marker: &M, install: F) -> Result<Option<T>, E>
where
    M: BindingMarker + ?Sized,
    F: FnOnce() -> Result<Option<T>, E>,
{
    if marker.is_bound() {
        return Ok(None);
    }
    let installed = install()?;
    if installed.is_some() {
        marker.mark_bound();
    }
    Ok(installed)
}
