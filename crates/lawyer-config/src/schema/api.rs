//! Backend connection settings.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Where the legal-assistant API lives and how long to wait for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL; `/ask`, `/upload-temp` etc. are appended to it.
    pub base_url: String,
    /// TCP connect timeout in seconds (valid range: 1-120).
    pub connect_timeout_secs: u32,
    /// Timeout for `/ask` in seconds (valid range: 1-600).
    pub request_timeout_secs: u32,
    /// Timeout for uploads in seconds (valid range: 1-3600).
    pub upload_timeout_secs: u32,
    /// Tell the backend to drop temporary documents when a new session starts.
    pub clear_session_on_reset: bool,
}

impl ApiConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.connect_timeout_secs))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.request_timeout_secs))
    }

    pub fn upload_timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.upload_timeout_secs))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".into(),
            connect_timeout_secs: 10,
            request_timeout_secs: 120,
            upload_timeout_secs: 300,
            clear_session_on_reset: true,
        }
    }
}
