use thiserror::Error;

/// Errors that can occur while announcing artifacts.
///
/// Callers treat every variant as best-effort: announcement failures are
/// logged and never fail a collection pass.
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("serialization error: {0}")]
    Serialization(#[from] rmp_serde::encode::Error),

    #[error("deserialization error: {0}")]
    Deserialization(#[from] rmp_serde::decode::Error),

    #[error("zeromq error: {0}")]
    Zmq(#[from] zeromq::ZmqError),

    #[error("transport error: {0}")]
    Transport(String),
}
