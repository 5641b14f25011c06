//! Redis-backed dedup registry.
//!
//! Records are plain string keys `{env}:{group}:{fingerprint}` holding a
//! JSON-serialized [`HashRecord`], written with `SET ... EX <ttl>` so Redis
//! expires them on its own. `register` is a last-write-wins upsert that
//! resets the TTL to the full window.

use std::time::Duration;

use async_trait::async_trait;
use redis::{AsyncCommands, AsyncIter};
use tokio::time::timeout;
use tracing::debug;

use crate::error::RegistryError;
use crate::namespace::Namespace;
use crate::record::HashRecord;
use crate::traits::DedupRegistry;

pub struct RedisRegistry {
    client: redis::Client,
    ttl_secs: usize,
    command_timeout: Duration,
}

impl RedisRegistry {
    pub fn new(
        url: &str,
        ttl: Duration,
        command_timeout: Duration,
    ) -> Result<Self, RegistryError> {
        let client = redis::Client::open(url)?;
        Ok(Self {
            client,
            ttl_secs: ttl.as_secs() as usize,
            command_timeout,
        })
    }

    async fn conn(&self) -> Result<redis::aio::Connection, RegistryError> {
        let conn = timeout(self.command_timeout, self.client.get_async_connection())
            .await
            .map_err(|_| RegistryError::Timeout(self.command_timeout))??;
        Ok(conn)
    }
}

#[async_trait]
impl DedupRegistry for RedisRegistry {
    async fn exists(
        &self,
        fingerprint: &str,
        namespace: &Namespace,
    ) -> Result<bool, RegistryError> {
        let key = namespace.record_key(fingerprint);
        let mut conn = self.conn().await?;
        let found = timeout(self.command_timeout, conn.exists::<_, bool>(&key))
            .await
            .map_err(|_| RegistryError::Timeout(self.command_timeout))??;
        Ok(found)
    }

    async fn register(&self, record: HashRecord) -> Result<(), RegistryError> {
        let key = record.key();
        let value = serde_json::to_string(&record)?;
        let mut conn = self.conn().await?;
        timeout(
            self.command_timeout,
            conn.set_ex::<_, _, ()>(&key, value, self.ttl_secs),
        )
        .await
        .map_err(|_| RegistryError::Timeout(self.command_timeout))??;
        debug!(key = %key, ttl_secs = self.ttl_secs, "registered fingerprint");
        Ok(())
    }

    // Full keyspace SCAN — operator tooling only, no timeout bound.
    async fn count(&self, namespace: &Namespace) -> Result<usize, RegistryError> {
        let pattern = format!("{}:*", namespace.scope());
        let mut conn = self.conn().await?;
        let mut iter: AsyncIter<'_, String> = conn.scan_match(&pattern).await?;
        let mut live = 0usize;
        while let Some(_key) = iter.next_item().await {
            live += 1;
        }
        Ok(live)
    }

    async fn delete(
        &self,
        fingerprint: &str,
        namespace: &Namespace,
    ) -> Result<bool, RegistryError> {
        let key = namespace.record_key(fingerprint);
        let mut conn = self.conn().await?;
        let removed = timeout(self.command_timeout, conn.del::<_, i64>(&key))
            .await
            .map_err(|_| RegistryError::Timeout(self.command_timeout))??;
        Ok(removed > 0)
    }
}
