use crate::{
    dto::CreateNoteRequest,
    models::Note,
    repository::{NoteStore, StoreError},
};

use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Body(#[from] serde_json::Error),

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Clone)]
pub struct NoteService {
    store: Arc<dyn NoteStore>,
}

impl NoteService {
    pub const fn new(store: Arc<dyn NoteStore>) -> Self {
        Self { store }
    }

    /// Creates a note from a raw request body. An empty body counts as `{}`.
    pub async fn create_note(&self, body: &[u8]) -> Result<Note, ServiceError> {
        let request = parse_create_request(body)?;
        let note = Note::new(request.title, request.content);

        self.store.put(note.clone()).await?;
        tracing::debug!("created note {}", note.id);

        Ok(note)
    }

    pub async fn get_all_notes(&self) -> Result<Vec<Note>, ServiceError> {
        Ok(self.store.scan().await?)
    }

    pub async fn get_one_note(&self, id: &str) -> Result<Option<Note>, ServiceError> {
        Ok(self.store.get(id).await?)
    }

    pub async fn delete_note(&self, id: &str) -> Result<(), ServiceError> {
        Ok(self.store.delete(id).await?)
    }
}

fn parse_create_request(body: &[u8]) -> Result<CreateNoteRequest, serde_json::Error> {
    if body.is_empty() {
        return Ok(CreateNoteRequest::default());
    }
    serde_json::from_slice(body)
}
