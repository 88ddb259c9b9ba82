mod memory;
mod postgres;
mod schema;

pub use memory::MemoryStore;
pub use postgres::PostgresStore;

use async_trait::async_trait;

use crate::models::Note;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Postgres(#[from] tokio_postgres::Error),

    #[error(transparent)]
    Migration(#[from] refinery::Error),

    #[error("connection to the note table is closed")]
    ConnectionClosed,

    #[error("invalid table name '{0}'")]
    InvalidTableName(String),
}

/// Key-value note table keyed by note id.
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// Inserts the note, replacing any item with the same id.
    async fn put(&self, note: Note) -> Result<(), StoreError>;

    /// Returns every stored note, in no particular order.
    async fn scan(&self) -> Result<Vec<Note>, StoreError>;

    async fn get(&self, id: &str) -> Result<Option<Note>, StoreError>;

    /// Removes the note if present. Deleting a missing id is not an error.
    async fn delete(&self, id: &str) -> Result<(), StoreError>;
}
