//! Keyboard shortcuts configuration types.
//!
//! Named `keybind_config` to avoid clash with the crate-level `keybinds` module.

use serde::{Deserialize, Serialize};

/// Keyboard shortcuts configuration.
///
/// Format: "Modifier+Key" where Modifier is one of: Ctrl, Alt, Shift.
/// Multiple modifiers: "Ctrl+Shift+N".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeybindConfig {
    pub send: String,
    pub attach_file: String,
    pub remove_file: String,
    pub toggle_upload_kind: String,
    pub upload: String,
    pub new_session: String,
    pub quit: String,
}

impl Default for KeybindConfig {
    fn default() -> Self {
        Self {
            send: "Enter".into(),
            attach_file: "Ctrl+O".into(),
            remove_file: "Ctrl+R".into(),
            toggle_upload_kind: "Ctrl+T".into(),
            upload: "Ctrl+U".into(),
            new_session: "Ctrl+N".into(),
            quit: "Ctrl+C".into(),
        }
    }
}
