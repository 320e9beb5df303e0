use async_trait::async_trait;

/// Raw string key-value storage underneath [`super::record_store::LocalRecordStore`].
#[async_trait]
pub trait KeyValueBackend: Send + Sync {
    async fn read(&self, key: &str) -> anyhow::Result<Option<String>>;
    async fn write(&self, key: &str, value: &str) -> anyhow::Result<()>;
}
