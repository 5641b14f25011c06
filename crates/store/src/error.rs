use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("object store error: {0}")]
    ObjectStore(#[from] object_store::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("not configured: {0}")]
    NotConfigured(String),

    #[error("put to '{key}' failed: {source}")]
    Put {
        key: String,
        #[source]
        source: object_store::Error,
    },
}
