//! Connection settings for [`HttpApiClient`](super::HttpApiClient).

use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClientConfig {
    /// Base URL without a trailing slash.
    pub base_url: String,
    pub connect_timeout: Duration,
    /// Applies to `/ask` and `/clear-session`.
    pub request_timeout: Duration,
    /// Applies to both upload endpoints.
    pub upload_timeout: Duration,
}

impl ApiClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(&base_url.into()),
            ..Self::default()
        }
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_upload_timeout(mut self, timeout: Duration) -> Self {
        self.upload_timeout = timeout;
        self
    }

    /// Full URL for an endpoint path such as `/ask`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(120),
            upload_timeout: Duration::from_secs(300),
        }
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_stripped() {
        let config = ApiClientConfig::new("http://localhost:8000///");
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.endpoint("/ask"), "http://localhost:8000/ask");
    }

    #[test]
    fn endpoint_keeps_base_path() {
        let config = ApiClientConfig::new("https://example.org/legal/");
        assert_eq!(
            config.endpoint("/upload-temp"),
            "https://example.org/legal/upload-temp"
        );
        assert_eq!(
            config.endpoint("clear-session"),
            "https://example.org/legal/clear-session"
        );
    }

    #[test]
    fn builder_overrides_timeouts() {
        let config = ApiClientConfig::default()
            .with_connect_timeout(Duration::from_secs(1))
            .with_request_timeout(Duration::from_secs(2))
            .with_upload_timeout(Duration::from_secs(3));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.connect_timeout, Duration::from_secs(1));
        assert_eq!(config.request_timeout, Duration::from_secs(2));
        assert_eq!(config.upload_timeout, Duration::from_secs(3));
    }
}
