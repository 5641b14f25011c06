use thiserror::Error;

/// Errors produced by source adapters.
///
/// A `generate` failure aborts the whole run; everything else is isolated
/// to the candidate it occurred on.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("candidate generation failed: {0}")]
    Generation(String),

    #[error("invalid payload: {0}")]
    InvalidPayload(String),

    #[error("{0}")]
    Other(String),
}
