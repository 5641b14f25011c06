use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;

/// One unit of fetch work, produced fresh by a source adapter for a single
/// collection pass and discarded afterwards. Never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct Candidate {
    /// Unique within one generation call; drives the storage filename and
    /// error attribution. The pipeline refuses empty identifiers.
    pub identifier: String,

    /// Opaque fetch target (usually a URL). Only the source's fetch
    /// implementation interprets it.
    pub source_location: String,

    /// Source-specific descriptive attributes, carried through to the
    /// stored-artifact announcement unchanged.
    pub metadata: HashMap<String, String>,

    /// Fetch-time parameters (headers, query params, timeout). Opaque to the
    /// pipeline, passed through to the source's fetch implementation.
    pub fetch_params: HashMap<String, String>,

    /// Calendar date used to compute the storage key partition.
    pub partition_date: NaiveDate,
}

impl Candidate {
    pub fn new(
        identifier: impl Into<String>,
        source_location: impl Into<String>,
        partition_date: NaiveDate,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            source_location: source_location.into(),
            metadata: HashMap::new(),
            fetch_params: HashMap::new(),
            partition_date,
        }
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub fn with_fetch_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fetch_params.insert(key.into(), value.into());
        self
    }
}
