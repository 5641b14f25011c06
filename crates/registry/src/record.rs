use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::namespace::Namespace;

/// Registry record for one stored artifact.
///
/// At most one live record exists per `(namespace, fingerprint)` pair within
/// a TTL window; its presence is the sole skip-on-duplicate signal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HashRecord {
    /// SHA-256 hex digest of the raw fetched bytes.
    pub fingerprint: String,
    /// `{environment}:{source_group}` scope this record belongs to.
    pub namespace: String,
    /// Storage key the content was written to.
    pub storage_location: String,
    /// When the record was (last) registered.
    pub registered_at: DateTime<Utc>,
    /// Candidate metadata plus storage integrity tokens (version, etag).
    pub extra: HashMap<String, String>,
}

impl HashRecord {
    pub fn new(
        fingerprint: impl Into<String>,
        namespace: &Namespace,
        storage_location: impl Into<String>,
        extra: HashMap<String, String>,
    ) -> Self {
        Self {
            fingerprint: fingerprint.into(),
            namespace: namespace.scope(),
            storage_location: storage_location.into(),
            registered_at: Utc::now(),
            extra,
        }
    }

    /// Full registry key for this record.
    pub fn key(&self) -> String {
        format!("{}:{}", self.namespace, self.fingerprint)
    }
}
