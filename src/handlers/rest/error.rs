use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{dto::ErrorResponse, service::ServiceError};

/// Everything a route can fail with. 400 and 404 bodies are plain text,
/// 500 carries the JSON envelope.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Unsupported route")]
    UnsupportedRoute,

    #[error("Note not found")]
    NoteNotFound,

    #[error(transparent)]
    Internal(#[from] ServiceError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::UnsupportedRoute => {
                (StatusCode::BAD_REQUEST, "Unsupported route").into_response()
            }
            Self::NoteNotFound => (StatusCode::NOT_FOUND, "Note not found").into_response(),
            Self::Internal(e) => {
                tracing::error!("failed to handle request: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        error: e.to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
