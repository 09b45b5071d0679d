use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use menu_core::MenuError;

// ---------------------------------------------------------------------------
// AppError: unified error type for HTTP responses
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self.0.downcast_ref::<MenuError>() {
            Some(MenuError::DuplicateOption { .. }) => StatusCode::CONFLICT,
            Some(MenuError::OptionNotFound { .. }) => StatusCode::NOT_FOUND,
            Some(e) if e.is_declined() => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{:#}", self.0);
        }
        let body = serde_json::json!({ "error": self.0.to_string() });
        (status, axum::Json(body)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
