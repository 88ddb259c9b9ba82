use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A stored note. Absent `title`/`content` are left out of the JSON form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Note ID (UUID v4, assigned on creation)
    pub id: String,
    /// Note title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Note content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Creation time, ISO-8601 UTC with millisecond precision
    pub created_at: String,
}

impl Note {
    pub fn new(title: Option<String>, content: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            content,
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::DateTime;

    #[test]
    fn new_note_gets_uuid_and_millisecond_timestamp() {
        let note = Note::new(Some("T".to_string()), None);

        let id = Uuid::parse_str(&note.id).unwrap();
        assert_eq!(id.get_version_num(), 4);
        assert_eq!(note.id, id.hyphenated().to_string());

        assert!(DateTime::parse_from_rfc3339(&note.created_at).is_ok());
        assert!(note.created_at.ends_with('Z'));
        // "2024-05-01T12:00:00.123Z"
        assert_eq!(note.created_at.len(), 24);
    }

    #[test]
    fn absent_fields_are_omitted_from_json() {
        let note = Note {
            id: "abc".to_string(),
            title: None,
            content: Some("body".to_string()),
            created_at: "2024-05-01T12:00:00.123Z".to_string(),
        };

        let json = serde_json::to_value(&note).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "abc",
                "content": "body",
                "createdAt": "2024-05-01T12:00:00.123Z"
            })
        );
    }
}
