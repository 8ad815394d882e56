//! HTTP transport for the backend.

mod config;
mod http;
mod response;


pub use config::{ApiClientConfig, DEFAULT_BASE_URL};
pub use http::HttpApiClient;
