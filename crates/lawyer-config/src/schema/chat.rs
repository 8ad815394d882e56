//! Conversation text and scrolling.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// First assistant message on startup.
    pub greeting: String,
    /// First assistant message after "new session".
    pub new_session_message: String,
    /// Lines moved per scroll key press (valid range: 1-50).
    pub scroll_step: u16,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            greeting: "Hello! I am your AI Legal Assistant. How can I help you today?".into(),
            new_session_message: "New session started. Previous temporary files are cleared."
                .into(),
            scroll_step: 3,
        }
    }
}
