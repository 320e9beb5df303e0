use crate::application::related_posts::use_case::SimilarityRanker;
use crate::domain::post::{entity::Post, source::BlogDataSource};
use crate::domain::shared::errors::BlogError;
use std::sync::Arc;

/// Read access to the published posts.
#[derive(Clone)]
pub struct PostCatalog {
    source: Arc<dyn BlogDataSource>,
    ranker: SimilarityRanker,
}

impl PostCatalog {
    pub fn new(source: Arc<dyn BlogDataSource>) -> Self {
        Self {
            source,
            ranker: SimilarityRanker::new(),
        }
    }

    /// Newest first by `dateISO`.
    pub async fn list(&self) -> Result<Vec<Post>, BlogError> {
        let mut posts = self.source.fetch_posts().await?;
        posts.sort_by(|a, b| b.date_iso.cmp(&a.date_iso));
        Ok(posts)
    }

    pub async fn find(&self, id: &str) -> Result<Post, BlogError> {
        self.source
            .fetch_posts()
            .await?
            .into_iter()
            .find(|post| post.id == id)
            .ok_or_else(|| BlogError::NotFound(format!("post {}", id)))
    }

    pub async fn related(&self, id: &str, limit: usize) -> Result<Vec<Post>, BlogError> {
        let posts = self.source.fetch_posts().await?;
        let reference = posts
            .iter()
            .find(|post| post.id == id)
            .ok_or_else(|| BlogError::NotFound(format!("post {}", id)))?;
        Ok(self
            .ranker
            .rank(reference, &posts, limit)
            .into_iter()
            .cloned()
            .collect())
    }
}
