use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Lookup miss: 404 with a JSON content type and no body.
    #[error("{0} Not found")]
    NotFound(String),
    /// Delete miss: 404 with a plain-text `<id> Not found` body.
    #[error("{0} Not found")]
    NotFoundText(String),
    #[error("{0}")]
    BadRequest(String),
}

impl ApiError {
    /// Delete reports a miss as text rather than an empty JSON response.
    pub fn from_delete(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound(id) => ApiError::NotFoundText(id),
            other => other.into(),
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound(id) => ApiError::NotFound(id),
            ServiceError::Validation(msg) => ApiError::BadRequest(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(_) => {
                (StatusCode::NOT_FOUND, [(header::CONTENT_TYPE, "application/json")]).into_response()
            }
            e @ ApiError::NotFoundText(_) => (StatusCode::NOT_FOUND, e.to_string()).into_response(),
            ApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(serde_json::json!({"error": msg}))).into_response()
            }
        }
    }
}
