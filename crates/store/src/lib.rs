pub mod backend;
pub mod error;
pub mod partition;
pub mod sink;

pub use backend::{LocalBackend, S3Backend, StorageBackend};
pub use error::StoreError;
pub use partition::{build_path, COMPRESSION_SUFFIX};
pub use sink::{ArtifactSink, PutReceipt};
