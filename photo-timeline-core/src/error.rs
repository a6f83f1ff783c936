/// Thông báo hiển thị khi không tải được `timeline.json`.
pub const NETWORK_FAILURE_TEXT: &str =
    "No se pudo cargar timeline.json. Primero ejecuta build_timeline.py";

/// Thông báo hiển thị khi nội dung tải về không đọc được.
pub const MALFORMED_BODY_TEXT: &str = "Error cargando los datos del timeline";

/// Lỗi khi tải tài liệu timeline.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    #[error("Không tải được tài nguyên: {0}")]
    NetworkOrHttp(String),
    #[error("Nội dung không đúng định dạng timeline: {0}")]
    MalformedBody(String),
}

impl LoadError {
    /// Kiểm tra mã HTTP; chỉ 2xx được coi là thành công.
    pub fn check_status(status: u16) -> Result<(), LoadError> {
        if (200..300).contains(&status) {
            Ok(())
        } else {
            Err(LoadError::NetworkOrHttp(format!("HTTP {status}")))
        }
    }

    /// Văn bản banner cho người dùng.
    pub fn banner_text(&self) -> &'static str {
        match self {
            LoadError::NetworkOrHttp(_) => NETWORK_FAILURE_TEXT,
            LoadError::MalformedBody(_) => MALFORMED_BODY_TEXT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_success_statuses_pass() {
        assert!(LoadError::check_status(200).is_ok());
        assert!(LoadError::check_status(204).is_ok());
        assert_eq!(
            LoadError::check_status(404),
            Err(LoadError::NetworkOrHttp("HTTP 404".to_string()))
        );
        assert!(LoadError::check_status(304).is_err());
        assert!(LoadError::check_status(500).is_err());
    }

    #[test]
    fn banner_text_follows_taxonomy() {
        assert_eq!(
            LoadError::NetworkOrHttp("offline".into()).banner_text(),
            "No se pudo cargar timeline.json. Primero ejecuta build_timeline.py"
        );
        assert_eq!(
            LoadError::MalformedBody("eof".into()).banner_text(),
            "Error cargando los datos del timeline"
        );
    }
}
