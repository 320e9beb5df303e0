use crate::domain::shared::errors::{BlogError, FieldError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CommentRecord {
    pub id: String,
    pub post_id: String,
    pub author: String,
    pub body: String,
    pub timestamp: DateTime<Utc>,
}

/// A comment that passed local validation and may be sent to the backend.
/// Both fields are already trimmed.
#[derive(Debug, Clone, Validate)]
pub struct CommentDraft {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub author: String,
    #[validate(length(min = 10, message = "Comment must be at least 10 characters"))]
    pub body: String,
}

impl CommentDraft {
    pub fn parse(author: &str, body: &str) -> Result<Self, BlogError> {
        let draft = Self {
            author: author.trim().to_string(),
            body: body.trim().to_string(),
        };

        let Err(errors) = draft.validate() else {
            return Ok(draft);
        };

        let by_field = errors.field_errors();
        let mut fields = Vec::new();
        for (name, value, required) in [
            ("author", &draft.author, "Please enter your name"),
            ("body", &draft.body, "Please enter a comment"),
        ] {
            let Some(field_errors) = by_field.get(name) else {
                continue;
            };
            let message = if value.is_empty() {
                required.to_string()
            } else {
                field_errors
                    .iter()
                    .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
                    .unwrap_or_else(|| format!("Invalid {}", name))
            };
            fields.push(FieldError::new(name, message));
        }
        Err(BlogError::Validation(fields))
    }

    pub fn into_record(self, post_id: &str, timestamp: DateTime<Utc>) -> CommentRecord {
        CommentRecord {
            id: Uuid::now_v7().to_string(),
            post_id: post_id.to_string(),
            author: self.author,
            body: self.body,
            timestamp,
        }
    }
}
