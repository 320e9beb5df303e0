use super::entity::Post;
use crate::domain::social::comment::CommentRecord;
use async_trait::async_trait;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum FetchError {
    #[error("Failed to load {resource}: {status}")]
    Status { resource: String, status: u16 },
    #[error("Failed to reach {resource}: {message}")]
    Unreachable { resource: String, message: String },
    #[error("Malformed payload from {resource}: {message}")]
    Malformed { resource: String, message: String },
}

/// Read-only source of reference posts and server-side comments.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlogDataSource: Send + Sync {
    async fn fetch_posts(&self) -> Result<Vec<Post>, FetchError>;

    /// Remote comments keyed by post id, in the order the source returns them.
    async fn fetch_comments(&self) -> Result<HashMap<String, Vec<CommentRecord>>, FetchError>;
}
