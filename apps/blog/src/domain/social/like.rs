use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Like state for one post as seen by this client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LikeRecord {
    pub post_id: String,
    pub count: u32,
    pub liked: bool,
}

impl LikeRecord {
    pub fn empty(post_id: &str) -> Self {
        Self {
            post_id: post_id.to_string(),
            count: 0,
            liked: false,
        }
    }

    /// The state a toggle moves to. Unliking never drops the count below zero.
    pub fn toggled(&self) -> Self {
        let count = if self.liked {
            self.count.saturating_sub(1)
        } else {
            self.count.saturating_add(1)
        };
        Self {
            post_id: self.post_id.clone(),
            count,
            liked: !self.liked,
        }
    }
}
