//! HTTP-facing errors

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use thiserror::Error;

use crate::store::StoreError;

/// Errors a request handler can return
#[derive(Error, Debug)]
pub enum ServerError {
    /// Body is not `{name: string, score: number}`
    #[error("Invalid input")]
    InvalidInput,

    /// The score could not be saved
    #[error("Failed to save score: {0}")]
    Store(#[from] StoreError),
}

impl ServerError {
    /// Status code sent to the client
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::InvalidInput => StatusCode::BAD_REQUEST,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let message = match &self {
            Self::InvalidInput => "Invalid input",
            Self::Store(e) => {
                log::error!("Failed to save score: {e}");
                "Failed to save score"
            }
        };
        (self.status(), Json(serde_json::json!({ "error": message }))).into_response()
    }
}
