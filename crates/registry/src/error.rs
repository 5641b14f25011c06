use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("redis error: {0}")]
    Redis(#[from] ::redis::RedisError),

    #[error("record encode error: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("registry command timed out after {0:?}")]
    Timeout(std::time::Duration),

    #[error("invalid namespace: {0}")]
    InvalidNamespace(String),
}
