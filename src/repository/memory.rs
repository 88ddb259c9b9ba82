use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{NoteStore, StoreError};
use crate::models::Note;

/// In-process note table, for local runs and tests.
#[derive(Default)]
pub struct MemoryStore {
    notes: RwLock<HashMap<String, Note>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NoteStore for MemoryStore {
    async fn put(&self, note: Note) -> Result<(), StoreError> {
        self.notes.write().await.insert(note.id.clone(), note);
        Ok(())
    }

    async fn scan(&self) -> Result<Vec<Note>, StoreError> {
        Ok(self.notes.read().await.values().cloned().collect())
    }

    async fn get(&self, id: &str) -> Result<Option<Note>, StoreError> {
        Ok(self.notes.read().await.get(id).cloned())
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        self.notes.write().await.remove(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(id: &str, title: &str) -> Note {
        Note {
            id: id.to_string(),
            title: Some(title.to_string()),
            content: None,
            created_at: "2024-05-01T12:00:00.000Z".to_string(),
        }
    }

    #[tokio::test]
    async fn put_overwrites_existing_id() {
        let store = MemoryStore::new();

        store.put(note("a", "first")).await.unwrap();
        store.put(note("a", "second")).await.unwrap();

        let all = store.scan().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].title.as_deref(), Some("second"));
    }

    #[tokio::test]
    async fn get_missing_returns_none() {
        let store = MemoryStore::new();
        store.put(note("a", "first")).await.unwrap();

        assert!(store.get("b").await.unwrap().is_none());
        assert_eq!(store.get("a").await.unwrap(), Some(note("a", "first")));
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let store = MemoryStore::new();
        store.put(note("a", "first")).await.unwrap();

        store.delete("a").await.unwrap();
        store.delete("a").await.unwrap();
        store.delete("never-existed").await.unwrap();

        assert!(store.scan().await.unwrap().is_empty());
    }
}
