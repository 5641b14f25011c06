//! Dedup registry trait definition.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::RegistryError;
use crate::namespace::Namespace;
use crate::record::HashRecord;

/// TTL-bounded store mapping content fingerprints to stored-artifact
/// metadata. Answers "have I stored these exact bytes before for this
/// source?".
#[async_trait]
pub trait DedupRegistry: Send + Sync {
    /// True iff a non-expired record exists for the pair.
    ///
    /// Never errors on "not found". Infrastructure failures (store
    /// unreachable) propagate to the caller — they must not be treated as
    /// "not a duplicate", since that would re-store unchanged content
    /// unbounded during an outage.
    async fn exists(
        &self,
        fingerprint: &str,
        namespace: &Namespace,
    ) -> Result<bool, RegistryError>;

    /// Idempotent upsert; resets the TTL to the full window starting now.
    /// Safe to call on an existing record (force re-collection re-registers).
    async fn register(&self, record: HashRecord) -> Result<(), RegistryError>;

    /// Number of live records in the namespace. Bulk scan, O(registry
    /// size) — operator tooling only, never the hot path.
    async fn count(&self, namespace: &Namespace) -> Result<usize, RegistryError>;

    /// Remove a record; returns whether one existed. Operator tooling only.
    async fn delete(
        &self,
        fingerprint: &str,
        namespace: &Namespace,
    ) -> Result<bool, RegistryError>;
}

/// Blanket implementation so `Arc<dyn DedupRegistry>` can be used directly.
#[async_trait]
impl<T: DedupRegistry + ?Sized> DedupRegistry for Arc<T> {
    async fn exists(
        &self,
        fingerprint: &str,
        namespace: &Namespace,
    ) -> Result<bool, RegistryError> {
        (**self).exists(fingerprint, namespace).await
    }

    async fn register(&self, record: HashRecord) -> Result<(), RegistryError> {
        (**self).register(record).await
    }

    async fn count(&self, namespace: &Namespace) -> Result<usize, RegistryError> {
        (**self).count(namespace).await
    }

    async fn delete(
        &self,
        fingerprint: &str,
        namespace: &Namespace,
    ) -> Result<bool, RegistryError> {
        (**self).delete(fingerprint, namespace).await
    }
}
