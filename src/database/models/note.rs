use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::collections::HashMap;
use uuid::Uuid;

use crate::types::{NoteId, UserId};

pub const DEFAULT_TAG: &str = "General";
pub const TITLE_MIN_CHARS: usize = 3;
pub const DESCRIPTION_MIN_CHARS: usize = 5;

/// A persisted note. Serialized with `_id` to keep the document-store shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    #[serde(rename = "_id")]
    pub id: NoteId,
    pub user: UserId,
    pub title: String,
    pub description: String,
    pub tag: String,
    pub date: DateTime<Utc>,
}

/// Raw `notes` table row
#[derive(Debug, Clone, FromRow)]
pub struct NoteRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: String,
    pub tag: String,
    pub date: DateTime<Utc>,
}

impl From<NoteRow> for Note {
    fn from(row: NoteRow) -> Self {
        Self {
            id: row.id.into(),
            user: row.user_id.into(),
            title: row.title,
            description: row.description,
            tag: row.tag,
            date: row.date,
        }
    }
}

/// Candidate record for creation. The owner always comes from the
/// authenticated identity, never from the request body.
#[derive(Debug, Clone, PartialEq)]
pub struct NewNote {
    pub user: UserId,
    pub title: String,
    pub description: String,
    pub tag: String,
}

impl NewNote {
    pub fn new(user: UserId, title: String, description: String, tag: Option<String>) -> Self {
        Self {
            user,
            title,
            description,
            tag: tag.unwrap_or_else(|| DEFAULT_TAG.to_string()),
        }
    }

    /// Check the minimum lengths, collecting every violated field
    pub fn validate(&self) -> Result<(), HashMap<String, String>> {
        let mut field_errors = HashMap::new();

        if self.title.chars().count() < TITLE_MIN_CHARS {
            field_errors.insert(
                "title".to_string(),
                format!("Title must be at least {} characters", TITLE_MIN_CHARS),
            );
        }
        if self.description.chars().count() < DESCRIPTION_MIN_CHARS {
            field_errors.insert(
                "description".to_string(),
                format!("Description must be at least {} characters", DESCRIPTION_MIN_CHARS),
            );
        }

        if field_errors.is_empty() {
            Ok(())
        } else {
            Err(field_errors)
        }
    }
}

/// Partial update. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoteChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub tag: Option<String>,
}

impl NoteChanges {
    /// Build a change set, treating empty strings as "not provided"
    pub fn from_fields(
        title: Option<String>,
        description: Option<String>,
        tag: Option<String>,
    ) -> Self {
        let provided = |v: Option<String>| v.filter(|s| !s.is_empty());
        Self {
            title: provided(title),
            description: provided(description),
            tag: provided(tag),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.tag.is_none()
    }

    pub fn apply_to(self, note: &mut Note) {
        if let Some(title) = self.title {
            note.title = title;
        }
        if let Some(description) = self.description {
            note.description = description;
        }
        if let Some(tag) = self.tag {
            note.tag = tag;
        }
    }
}
