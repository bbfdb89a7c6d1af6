use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] crate::engine::EngineError),

    /// Body that does not deserialize into a configuration, e.g. a
    /// non-numeric rate or a negative packet size
    #[error("Invalid configuration: {}", .0.body_text())]
    MalformedConfig(#[from] JsonRejection),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code) = match &self {
            ApiError::InvalidConfig(_) | ApiError::MalformedConfig(_) => {
                (StatusCode::BAD_REQUEST, "INVALID_CONFIG")
            }
            ApiError::InternalError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        let body = Json(json!({
            "error": self.to_string(),
            "code": error_code,
        }));

        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
