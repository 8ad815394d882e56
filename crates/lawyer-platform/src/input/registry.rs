use std::collections::HashMap;

use lawyer_common::actions::Action;
use lawyer_config::schema::KeybindConfig;

use crate::keymap::{keybind_to_display, parse_keybind};

use super::key_combo::KeyCombo;

/// Maps key combinations to chat [`Action`]s.
///
/// Built once from [`KeybindConfig`] at startup.
#[derive(Debug, Default)]
pub struct KeybindRegistry {
    bindings: HashMap<KeyCombo, Action>,
}

impl KeybindRegistry {
    /// Build the registry from the config keybind section.
    ///
    /// Invalid keybind strings are logged as warnings and skipped.
    pub fn from_config(config: &KeybindConfig) -> Self {
        let mappings: [(&str, Action); 7] = [
            (&config.send, Action::SendMessage),
            (&config.attach_file, Action::AttachFile),
            (&config.remove_file, Action::RemoveFile),
            (&config.toggle_upload_kind, Action::ToggleUploadKind),
            (&config.upload, Action::Upload),
            (&config.new_session, Action::NewSession),
            (&config.quit, Action::Quit),
        ];

        let mut bindings = HashMap::new();
        for (binding_str, action) in mappings {
            match parse_keybind(binding_str) {
                Ok(kb) => {
                    bindings.insert(KeyCombo::from_keybind(&kb), action);
                }
                Err(e) => {
                    tracing::warn!("invalid keybind '{binding_str}': {e}");
                }
            }
        }

        Self { bindings }
    }

    pub fn lookup(&self, combo: &KeyCombo) -> Option<&Action> {
        self.bindings.get(combo)
    }

    /// Display string for the key bound to `action`, for the help line.
    pub fn keybind_for_action(&self, action: &Action) -> Option<String> {
        self.bindings
            .iter()
            .find(|(_, a)| *a == action)
            .map(|(combo, _)| keybind_to_display(&combo.to_keybind()))
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
