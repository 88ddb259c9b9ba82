use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateNoteRequest {
    /// Note title
    #[serde(default)]
    pub title: Option<String>,
    /// Note content
    #[serde(default)]
    pub content: Option<String>,
}

/// Body of every 500 response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Failure message
    pub error: String,
}
