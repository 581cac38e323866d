use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("registration {0} not found")]
    NotFound(u64),
}

pub type RegistryResult<T> = Result<T, RegistryError>;

impl IntoResponse for RegistryError {
    fn into_response(self) -> Response {
        match self {
            RegistryError::NotFound(_) => (
                StatusCode::NOT_FOUND,
                Json(json!({ "detail": "Registration not found" })),
            )
                .into_response(),
        }
    }
}
