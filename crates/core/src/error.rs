use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("unknown environment '{0}' (expected dev, staging, or prod)")]
    UnknownEnvironment(String),
}
