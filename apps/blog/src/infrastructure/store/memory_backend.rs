use super::traits::KeyValueBackend;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// In-process backend. With a quota set, writes that would push the total
/// stored size past it are rejected, the way a browser rejects writes once
/// local storage is full.
#[derive(Default)]
pub struct MemoryBackend {
    entries: RwLock<HashMap<String, String>>,
    quota_bytes: Option<usize>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            entries: RwLock::default(),
            quota_bytes: Some(quota_bytes),
        }
    }

    /// Stores a value without quota checks. Used to seed fixtures.
    pub async fn insert_raw(&self, key: &str, value: &str) {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
    }
}

#[async_trait]
impl KeyValueBackend for MemoryBackend {
    async fn read(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn write(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let mut entries = self.entries.write().await;
        if let Some(quota) = self.quota_bytes {
            let used: usize = entries
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            let needed = used + key.len() + value.len();
            if needed > quota {
                anyhow::bail!(
                    "Storage quota exceeded writing {}: {} of {} bytes",
                    key,
                    needed,
                    quota
                );
            }
        }
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
