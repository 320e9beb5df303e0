use crate::domain::post::source::FetchError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum BlogError {
    #[error("Validation error: {}", describe_fields(.0))]
    Validation(Vec<FieldError>),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Submit error: {0}")]
    Submit(String),
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("Not found: {0}")]
    NotFound(String),
}

fn describe_fields(fields: &[FieldError]) -> String {
    fields
        .iter()
        .map(|f| format!("{}: {}", f.field, f.message))
        .collect::<Vec<_>>()
        .join("; ")
}
