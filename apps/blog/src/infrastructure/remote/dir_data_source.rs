use crate::domain::post::{
    entity::Post,
    source::{BlogDataSource, FetchError},
};
use crate::domain::social::comment::CommentRecord;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::path::PathBuf;

/// Reads the same documents as [`super::http_data_source::HttpDataSource`]
/// from a local directory.
pub struct DirDataSource {
    dir: PathBuf,
    posts_resource: String,
    comments_resource: String,
}

impl DirDataSource {
    pub fn new(
        dir: impl Into<PathBuf>,
        posts_resource: impl Into<String>,
        comments_resource: impl Into<String>,
    ) -> Self {
        Self {
            dir: dir.into(),
            posts_resource: posts_resource.into(),
            comments_resource: comments_resource.into(),
        }
    }

    async fn read_json<T: DeserializeOwned>(&self, resource: &str) -> Result<T, FetchError> {
        let raw = match tokio::fs::read_to_string(self.dir.join(resource)).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(FetchError::Status {
                    resource: resource.to_string(),
                    status: 404,
                });
            }
            Err(e) => {
                return Err(FetchError::Unreachable {
                    resource: resource.to_string(),
                    message: e.to_string(),
                });
            }
        };

        serde_json::from_str(&raw).map_err(|e| FetchError::Malformed {
            resource: resource.to_string(),
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl BlogDataSource for DirDataSource {
    async fn fetch_posts(&self) -> Result<Vec<Post>, FetchError> {
        self.read_json(&self.posts_resource).await
    }

    async fn fetch_comments(&self) -> Result<HashMap<String, Vec<CommentRecord>>, FetchError> {
        self.read_json(&self.comments_resource).await
    }
}
