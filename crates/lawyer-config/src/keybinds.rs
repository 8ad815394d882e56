//! Keybind validation utilities.

use crate::schema::KeybindConfig;
use lawyer_common::ConfigError;
use std::collections::HashMap;

/// Returns all keybinds as `(name, binding)` pairs.
pub fn all_keybinds(config: &KeybindConfig) -> Vec<(&str, &str)> {
    vec![
        ("send", &config.send),
        ("attach_file", &config.attach_file),
        ("remove_file", &config.remove_file),
        ("toggle_upload_kind", &config.toggle_upload_kind),
        ("upload", &config.upload),
        ("new_session", &config.new_session),
        ("quit", &config.quit),
    ]
}

/// Validate that no two keybinds are mapped to the same key combination.
///
/// Comparison ignores case, so `Ctrl+n` and `ctrl+N` collide.
pub fn validate_no_duplicates(config: &KeybindConfig) -> Result<(), ConfigError> {
    let binds = all_keybinds(config);
    let mut seen: HashMap<String, &str> = HashMap::new();

    for (name, binding) in &binds {
        let normalized = binding.trim().to_lowercase();
        if let Some(existing_name) = seen.get(&normalized) {
            return Err(ConfigError::ValidationError(format!(
                "duplicate keybind '{binding}': assigned to both '{existing_name}' and '{name}'"
            )));
        }
        seen.insert(normalized, name);
    }

    Ok(())
}
