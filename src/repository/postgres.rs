use async_trait::async_trait;
use tokio_postgres::{Client, NoTls, Row};

use super::{NoteStore, StoreError, schema};
use crate::models::Note;

pub struct PostgresStore {
    client: Client,
    queries: Queries,
}

/// SQL text for one note table.
struct Queries {
    put: String,
    scan: String,
    get: String,
    delete: String,
}

impl Queries {
    fn for_table(table: &str) -> Self {
        Self {
            put: format!(
                "INSERT INTO {table} (id, title, content, created_at) VALUES ($1, $2, $3, $4) \
                 ON CONFLICT (id) DO UPDATE SET title = EXCLUDED.title, \
                 content = EXCLUDED.content, created_at = EXCLUDED.created_at"
            ),
            scan: format!("SELECT id, title, content, created_at FROM {table}"),
            get: format!("SELECT id, title, content, created_at FROM {table} WHERE id = $1"),
            delete: format!("DELETE FROM {table} WHERE id = $1"),
        }
    }
}

impl PostgresStore {
    /// Connects to the database and applies pending migrations for `table`.
    pub async fn connect(database_dsn: &str, table: &str) -> Result<Self, StoreError> {
        let runner = schema::runner(table)?;

        let (mut client, con) = tokio_postgres::connect(database_dsn, NoTls).await?;

        tokio::spawn(async move {
            if let Err(e) = con.await {
                tracing::error!("connection error: {}", e);
            }
        });

        let migrations_report = runner.run_async(&mut client).await?;

        for migration in migrations_report.applied_migrations() {
            tracing::info!(
                "Migration Applied -  Name: {}, Version: {}",
                migration.name(),
                migration.version()
            );
        }

        tracing::info!("DB migrations finished for table '{}'", table);

        Ok(Self {
            client,
            queries: Queries::for_table(table),
        })
    }

    fn client(&self) -> Result<&Client, StoreError> {
        if self.client.is_closed() {
            return Err(StoreError::ConnectionClosed);
        }
        Ok(&self.client)
    }
}

fn note_from_row(row: &Row) -> Note {
    Note {
        id: row.get("id"),
        title: row.get("title"),
        content: row.get("content"),
        created_at: row.get("created_at"),
    }
}

#[async_trait]
impl NoteStore for PostgresStore {
    async fn put(&self, note: Note) -> Result<(), StoreError> {
        self.client()?
            .execute(
                self.queries.put.as_str(),
                &[&note.id, &note.title, &note.content, &note.created_at],
            )
            .await?;

        Ok(())
    }

    async fn scan(&self) -> Result<Vec<Note>, StoreError> {
        let rows = self.client()?.query(self.queries.scan.as_str(), &[]).await?;

        Ok(rows.iter().map(note_from_row).collect())
    }

    async fn get(&self, id: &str) -> Result<Option<Note>, StoreError> {
        let row = self.client()?.query_opt(self.queries.get.as_str(), &[&id]).await?;

        Ok(row.as_ref().map(note_from_row))
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let rows = self.client()?.execute(self.queries.delete.as_str(), &[&id]).await?;

        tracing::debug!("delete of note {} removed {} row(s)", id, rows);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queries_target_the_configured_table() {
        let queries = Queries::for_table("team_notes");

        assert!(queries.put.starts_with("INSERT INTO team_notes "));
        assert!(queries.scan.ends_with("FROM team_notes"));
        assert!(queries.get.contains("FROM team_notes WHERE id = $1"));
        assert_eq!(queries.delete, "DELETE FROM team_notes WHERE id = $1");
    }
}
