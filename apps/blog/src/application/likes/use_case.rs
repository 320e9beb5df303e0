use crate::domain::shared::errors::BlogError;
use crate::domain::social::{
    like::LikeRecord,
    transport::{RemoteRequest, RemoteTransport},
};
use crate::infrastructure::store::record_store::LocalRecordStore;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{info, warn};

/// Optimistic like/unlike for posts.
///
/// A toggle is written to the store before the backend is asked to confirm
/// it, so readers see the new state immediately. If confirmation fails the
/// previous record is written back and the error is returned.
///
/// Toggles for the same post must not overlap; callers serialize them.
#[derive(Clone)]
pub struct LikeService {
    store: LocalRecordStore,
    transport: Arc<dyn RemoteTransport>,
    namespace: String,
}

impl LikeService {
    pub fn new(
        store: LocalRecordStore,
        transport: Arc<dyn RemoteTransport>,
        namespace: impl Into<String>,
    ) -> Self {
        Self {
            store,
            transport,
            namespace: namespace.into(),
        }
    }

    pub async fn state(&self, post_id: &str) -> LikeRecord {
        let records: BTreeMap<String, LikeRecord> = self.store.get_all(&self.namespace).await;
        records
            .get(post_id)
            .cloned()
            .unwrap_or_else(|| LikeRecord::empty(post_id))
    }

    pub async fn toggle(&self, post_id: &str) -> Result<LikeRecord, BlogError> {
        let (previous, target) = self
            .store
            .update(&self.namespace, |records: &mut BTreeMap<String, LikeRecord>| {
                let previous = records
                    .get(post_id)
                    .cloned()
                    .unwrap_or_else(|| LikeRecord::empty(post_id));
                let target = previous.toggled();
                records.insert(post_id.to_string(), target.clone());
                (previous, target)
            })
            .await;

        let request = RemoteRequest::ConfirmLike {
            post_id: post_id.to_string(),
            liked: target.liked,
        };
        match self.transport.send(request).await {
            Ok(()) => {
                info!(
                    "Like toggled post_id={} liked={} count={}",
                    post_id, target.liked, target.count
                );
                Ok(target)
            }
            Err(e) => {
                warn!("Like confirmation failed post_id={}: {}. Rolling back.", post_id, e);
                self.store
                    .update(&self.namespace, |records: &mut BTreeMap<String, LikeRecord>| {
                        records.insert(post_id.to_string(), previous);
                    })
                    .await;
                Err(BlogError::Network(e.0))
            }
        }
    }
}
