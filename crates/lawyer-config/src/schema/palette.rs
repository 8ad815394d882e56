//! Colour palette for the terminal UI.
//!
//! Named `palette` to avoid clash with the crate-level `colors` module.

use serde::{Deserialize, Serialize};

/// Colours as `#RRGGBB` strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    pub user: String,
    pub assistant: String,
    pub citation: String,
    pub success: String,
    pub warning: String,
    pub error: String,
    pub muted: String,
    pub border: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            user: "#8cbedc".into(),
            assistant: "#f0ece4".into(),
            citation: "#cba6f7".into(),
            success: "#00ff88".into(),
            warning: "#ff6b00".into(),
            error: "#ff4444".into(),
            muted: "#888888".into(),
            border: "#00d4ff".into(),
        }
    }
}
