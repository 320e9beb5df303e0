use super::traits::KeyValueBackend;
use async_trait::async_trait;
use redis::{AsyncCommands, Client};

/// Keeps namespaces as plain Redis strings, without expiry.
pub struct RedisBackend {
    client: Client,
    prefix: String,
}

impl RedisBackend {
    pub fn new(client: Client, prefix: impl Into<String>) -> Self {
        Self {
            client,
            prefix: prefix.into(),
        }
    }

    fn key(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }
}

#[async_trait]
impl KeyValueBackend for RedisBackend {
    async fn read(&self, key: &str) -> anyhow::Result<Option<String>> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let value: Option<String> = conn.get(self.key(key)).await?;
        Ok(value)
    }

    async fn write(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let _: () = conn.set(self.key(key), value).await?;
        Ok(())
    }
}
