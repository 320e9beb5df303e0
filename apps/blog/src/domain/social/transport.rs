use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// A write the site would send to its backend.
#[derive(Debug, Clone, PartialEq)]
pub enum RemoteRequest {
    ConfirmLike { post_id: String, liked: bool },
    SubmitComment { post_id: String },
}

impl fmt::Display for RemoteRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfirmLike { post_id, liked } => {
                write!(f, "confirm_like(post={}, liked={})", post_id, liked)
            }
            Self::SubmitComment { post_id } => write!(f, "submit_comment(post={})", post_id),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Remote confirmation channel. Completes once the backend accepted the
/// request; there is no payload.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RemoteTransport: Send + Sync {
    async fn send(&self, request: RemoteRequest) -> Result<(), TransportError>;
}
