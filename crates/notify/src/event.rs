use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use harvest_core::Environment;

/// "New artifact stored" event announced to downstream consumers.
///
/// The authoritative record of an artifact's existence is the dedup
/// registry plus the object store; this event is a best-effort side
/// channel with at-most-once delivery.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactEvent {
    pub source_group: String,
    pub environment: Environment,
    /// Candidate identifier with the compression suffix removed.
    pub artifact_id: String,
    /// Storage key the artifact was written to.
    pub location: String,
    /// Store version token (empty when the store has no versioning).
    pub version: String,
    /// Content tag from the store, quotes stripped.
    pub integrity: String,
    /// Candidate metadata plus collection-time fields (publish timestamp,
    /// run correlation id, source location, raw byte size, fingerprint).
    pub metadata: HashMap<String, String>,
}

impl ArtifactEvent {
    /// Message key downstream consumers can partition and deduplicate on.
    pub fn message_key(&self) -> String {
        format!("{}:{}", self.source_group, self.artifact_id)
    }
}
