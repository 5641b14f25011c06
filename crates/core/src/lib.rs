pub mod candidate;
pub mod config;
pub mod environment;
pub mod error;

pub use candidate::Candidate;
pub use config::Config;
pub use environment::Environment;
pub use error::CoreError;
