use super::traits::KeyValueBackend;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};
use tracing::{debug, error, warn};

/// Namespaced record collections persisted as one JSON object per namespace.
///
/// Persistence is best-effort: unreadable or corrupt namespaces read back as
/// empty, and failed writes are logged rather than returned. Callers never see
/// a storage error.
///
/// Every saved namespace is also kept in memory and reads are served from that
/// copy first, so a change stays visible to this process even when the backend
/// rejected the write.
///
/// Clones share the backend, the in-memory copies and the per-namespace locks.
#[derive(Clone)]
pub struct LocalRecordStore {
    backend: Arc<dyn KeyValueBackend>,
    snapshots: Arc<Mutex<HashMap<String, Value>>>,
    locks: Arc<Mutex<HashMap<String, Arc<tokio::sync::Mutex<()>>>>>,
}

impl LocalRecordStore {
    pub fn new(backend: Arc<dyn KeyValueBackend>) -> Self {
        Self {
            backend,
            snapshots: Arc::default(),
            locks: Arc::default(),
        }
    }

    pub async fn get_all<T: DeserializeOwned>(&self, namespace: &str) -> BTreeMap<String, T> {
        let value = match self.snapshot(namespace) {
            Some(value) => value,
            None => match self.load(namespace).await {
                Some(value) => value,
                None => return BTreeMap::new(),
            },
        };

        match serde_json::from_value(value) {
            Ok(records) => records,
            Err(e) => {
                warn!("Corrupt data in namespace={}: {}. Treating as empty.", namespace, e);
                BTreeMap::new()
            }
        }
    }

    pub async fn save<T: Serialize>(&self, namespace: &str, records: &BTreeMap<String, T>) {
        let value = match serde_json::to_value(records) {
            Ok(value) => value,
            Err(e) => {
                error!("Failed to serialize namespace={}: {}", namespace, e);
                return;
            }
        };
        let json = value.to_string();
        self.remember(namespace, value);

        match self.backend.write(namespace, &json).await {
            Ok(()) => debug!("Saved namespace={} ({} bytes)", namespace, json.len()),
            Err(e) => error!(
                "Failed to persist namespace={}: {}. Change kept in memory only.",
                namespace, e
            ),
        }
    }

    /// Read-modify-write of a whole namespace. Concurrent updates to the same
    /// namespace through this store run one at a time.
    pub async fn update<T, R, F>(&self, namespace: &str, mutate: F) -> R
    where
        T: Serialize + DeserializeOwned + Send,
        F: FnOnce(&mut BTreeMap<String, T>) -> R + Send,
        R: Send,
    {
        let lock = self.namespace_lock(namespace);
        let _guard = lock.lock().await;

        let mut records = self.get_all(namespace).await;
        let result = mutate(&mut records);
        self.save(namespace, &records).await;
        result
    }

    async fn load(&self, namespace: &str) -> Option<Value> {
        let raw = match self.backend.read(namespace).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!("Failed to read namespace={}: {}. Treating as empty.", namespace, e);
                return None;
            }
        };

        match serde_json::from_str::<Value>(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Corrupt data in namespace={}: {}. Treating as empty.", namespace, e);
                None
            }
        }
    }

    fn snapshot(&self, namespace: &str) -> Option<Value> {
        let snapshots = self.snapshots.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        snapshots.get(namespace).cloned()
    }

    fn remember(&self, namespace: &str, value: Value) {
        let mut snapshots = self.snapshots.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        snapshots.insert(namespace.to_string(), value);
    }

    fn namespace_lock(&self, namespace: &str) -> Arc<tokio::sync::Mutex<()>> {
        let mut locks = self.locks.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        locks.entry(namespace.to_string()).or_default().clone()
    }
}
