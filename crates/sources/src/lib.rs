pub mod http;
pub mod rest;

pub use http::HttpFetcher;
pub use rest::RestSource;
