pub mod error;
pub mod result;
pub mod run;
pub mod source;

pub use error::SourceError;
pub use result::{CandidateFailure, RunOptions, RunResult};
pub use run::CollectionPipeline;
pub use source::{GenerateParams, SourceAdapter};
