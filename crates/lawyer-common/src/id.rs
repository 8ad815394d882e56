use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of leading characters shown when a session id is displayed.
const SHORT_LEN: usize = 8;

/// Short request tag used to correlate log lines for one HTTP call.
pub fn new_correlation_id() -> String {
    let uuid = uuid::Uuid::new_v4();
    let bytes = uuid.as_bytes();
    format!(
        "{:02x}{:02x}{:02x}{:02x}",
        bytes[0], bytes[1], bytes[2], bytes[3]
    )
}

/// Opaque session token issued by the backend after a temporary upload.
///
/// The client never mints one; it only stores what `/upload-temp` returned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Wrap a backend-issued id exactly as sent. Blank ids are treated as
    /// "no session".
    pub fn from_backend(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            None
        } else {
            Some(Self(id))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First eight characters followed by `...`, as shown in the header.
    pub fn short(&self) -> String {
        let prefix: String = self.0.chars().take(SHORT_LEN).collect();
        format!("{prefix}...")
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
