use refinery::{Migration, Runner};

use super::StoreError;

/// Table names end up in SQL text, so only plain identifiers are accepted.
pub fn validate_table_name(table: &str) -> Result<(), StoreError> {
    let mut chars = table.chars();
    let valid = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && table.len() <= 63;

    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidTableName(table.to_string()))
    }
}

/// Migration runner creating the note table. Each table keeps its own
/// history table so that switching `table` creates the new one.
pub fn runner(table: &str) -> Result<Runner, StoreError> {
    validate_table_name(table)?;

    let create_table = format!(
        "CREATE TABLE IF NOT EXISTS {table} (
            id TEXT PRIMARY KEY,
            title TEXT,
            content TEXT,
            created_at TEXT NOT NULL
        );"
    );
    let migration = Migration::unapplied("V1__create_notes", &create_table)?;

    let mut runner = Runner::new(&[migration]);
    runner.set_migration_table_name(format!("refinery_schema_history_{table}"));

    Ok(runner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_identifiers() {
        for table in ["notes", "Notes", "_notes", "notes_v2"] {
            assert!(validate_table_name(table).is_ok(), "{table}");
        }
    }

    #[test]
    fn rejects_anything_else() {
        for table in ["", "2notes", "notes;drop", "my notes", "notes-v2", "\"notes\""] {
            assert!(
                matches!(
                    validate_table_name(table),
                    Err(StoreError::InvalidTableName(ref name)) if name == table
                ),
                "{table}"
            );
        }
    }

    #[test]
    fn runner_rejects_invalid_table_before_building() {
        assert!(matches!(
            runner("notes; DROP TABLE x"),
            Err(StoreError::InvalidTableName(_))
        ));
        assert!(runner("notes").is_ok());
    }
}
