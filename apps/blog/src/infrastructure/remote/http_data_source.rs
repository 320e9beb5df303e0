use crate::domain::post::{
    entity::Post,
    source::{BlogDataSource, FetchError},
};
use crate::domain::social::comment::CommentRecord;
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, warn};

/// Reads the post and comment documents published next to the site.
pub struct HttpDataSource {
    client: Client,
    base_url: Url,
    posts_resource: String,
    comments_resource: String,
}

impl HttpDataSource {
    pub fn new(
        base_url: &str,
        posts_resource: impl Into<String>,
        comments_resource: impl Into<String>,
        timeout: Duration,
    ) -> anyhow::Result<Self> {
        let mut base_url = Url::parse(base_url)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url,
            posts_resource: posts_resource.into(),
            comments_resource: comments_resource.into(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, resource: &str) -> Result<T, FetchError> {
        let url = self
            .base_url
            .join(resource)
            .map_err(|e| FetchError::Unreachable {
                resource: resource.to_string(),
                message: e.to_string(),
            })?;

        debug!("Fetching {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Unreachable {
                resource: resource.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Fetching {} returned {}", resource, status);
            return Err(FetchError::Status {
                resource: resource.to_string(),
                status: status.as_u16(),
            });
        }

        response.json::<T>().await.map_err(|e| FetchError::Malformed {
            resource: resource.to_string(),
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl BlogDataSource for HttpDataSource {
    async fn fetch_posts(&self) -> Result<Vec<Post>, FetchError> {
        self.get_json(&self.posts_resource).await
    }

    async fn fetch_comments(&self) -> Result<HashMap<String, Vec<CommentRecord>>, FetchError> {
        self.get_json(&self.comments_resource).await
    }
}
