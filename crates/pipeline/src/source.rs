use std::collections::HashMap;

use async_trait::async_trait;

use harvest_core::Candidate;

use crate::error::SourceError;

/// Free-form parameters forwarded verbatim from the caller to `generate`.
pub type GenerateParams = HashMap<String, String>;

/// Capability interface every source plugs into the pipeline.
///
/// A source owns candidate enumeration, byte fetching, and its own content
/// policy. The pipeline never interprets `source_location` or
/// `fetch_params`, and it never special-cases "empty but valid" payloads —
/// a source that wants to store an upstream "no data available" response
/// simply accepts it in `validate`.
#[async_trait]
pub trait SourceAdapter: Send + Sync {
    /// Logical identifier for this source's dataset (one scraper = one
    /// group). Part of the dedup namespace and every storage key.
    fn source_group(&self) -> &str;

    /// Enumerate the fetch work for one pass. Candidates are created fresh
    /// per call and discarded afterwards.
    async fn generate(&self, params: &GenerateParams) -> Result<Vec<Candidate>, SourceError>;

    /// Fetch the raw bytes for one candidate.
    async fn fetch(&self, candidate: &Candidate) -> Result<Vec<u8>, SourceError>;

    /// Source-specific content check. Each source declares its own
    /// tolerance policy here; the default only rejects empty content.
    fn validate(&self, content: &[u8], _candidate: &Candidate) -> bool {
        !content.is_empty()
    }
}
