use crate::domain::post::source::BlogDataSource;
use crate::domain::shared::errors::BlogError;
use crate::domain::social::{
    comment::{CommentDraft, CommentRecord},
    transport::{RemoteRequest, RemoteTransport},
};
use crate::infrastructure::store::record_store::LocalRecordStore;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Clone)]
pub struct CommentService {
    store: LocalRecordStore,
    transport: Arc<dyn RemoteTransport>,
    source: Arc<dyn BlogDataSource>,
    namespace: String,
}

impl CommentService {
    pub fn new(
        store: LocalRecordStore,
        transport: Arc<dyn RemoteTransport>,
        source: Arc<dyn BlogDataSource>,
        namespace: impl Into<String>,
    ) -> Self {
        Self {
            store,
            transport,
            source,
            namespace: namespace.into(),
        }
    }

    /// Server comments for the post followed by the ones submitted from this
    /// client, each in the order its source keeps them.
    pub async fn fetch(&self, post_id: &str) -> Result<Vec<CommentRecord>, BlogError> {
        let mut remote = self.source.fetch_comments().await.map_err(|e| {
            warn!("Failed to fetch comments for post_id={}: {}", post_id, e);
            e
        })?;
        let mut comments = remote.remove(post_id).unwrap_or_default();
        comments.extend(self.local_comments(post_id).await);
        Ok(comments)
    }

    pub async fn local_comments(&self, post_id: &str) -> Vec<CommentRecord> {
        let mut records: BTreeMap<String, Vec<CommentRecord>> =
            self.store.get_all(&self.namespace).await;
        records.remove(post_id).unwrap_or_default()
    }

    /// Validates, sends, then stores the comment. Nothing is stored unless
    /// the backend accepted it.
    pub async fn submit(
        &self,
        post_id: &str,
        author: &str,
        body: &str,
    ) -> Result<CommentRecord, BlogError> {
        let draft = CommentDraft::parse(author, body)?;

        self.transport
            .send(RemoteRequest::SubmitComment {
                post_id: post_id.to_string(),
            })
            .await
            .map_err(|e| {
                warn!("Comment submit failed post_id={}: {}", post_id, e);
                BlogError::Submit(e.0)
            })?;

        let record = draft.into_record(post_id, Utc::now());
        let stored = record.clone();
        self.store
            .update(
                &self.namespace,
                |records: &mut BTreeMap<String, Vec<CommentRecord>>| {
                    records.entry(post_id.to_string()).or_default().push(stored);
                },
            )
            .await;

        info!("Comment added post_id={} id={}", post_id, record.id);
        Ok(record)
    }
}
