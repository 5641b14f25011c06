use serde::Serialize;

use crate::source::GenerateParams;

/// Caller-supplied knobs for one collection pass.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Bypass the duplicate check but still store and re-register (refreshed
    /// TTL, updated storage location). The documented recovery path after a
    /// partial failure.
    pub force: bool,

    /// Skip the duplicate check entirely — no `exists` call at all. Takes
    /// precedence over `force`; intended for testing.
    pub skip_hash_check: bool,

    /// Forwarded verbatim to the source's `generate`.
    pub params: GenerateParams,
}

/// One per-candidate failure, in processing order.
#[derive(Debug, Clone, Serialize)]
pub struct CandidateFailure {
    pub candidate_id: String,
    pub message: String,
}

/// Accumulated outcome of one collection pass.
#[derive(Debug, Default, Serialize)]
pub struct RunResult {
    pub total_candidates: usize,
    pub collected: usize,
    pub skipped_duplicate: usize,
    pub failed: usize,
    pub errors: Vec<CandidateFailure>,
}

impl RunResult {
    pub(crate) fn record_failure(&mut self, candidate_id: &str, message: String) {
        self.failed += 1;
        self.errors.push(CandidateFailure {
            candidate_id: candidate_id.to_string(),
            message,
        });
    }
}

/// Terminal state of one candidate inside a run.
#[derive(Debug)]
pub(crate) enum CandidateOutcome {
    Collected,
    SkippedDuplicate,
    Failed(String),
}
