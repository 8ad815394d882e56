//! Full configuration validation.
//!
//! Validates numeric ranges, the API URL, keybind uniqueness, and color
//! formats. Each section has its own submodule; this orchestrator calls them
//! all and collects errors into a single `ConfigError`.

mod api;
mod helpers;
mod misc;


use crate::keybinds;
use crate::schema::LawyerConfig;
use lawyer_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &LawyerConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    if let Err(e) = keybinds::validate_no_duplicates(&config.keybinds) {
        errors.push(e.to_string());
    }

    api::validate_api(&mut errors, config);
    misc::validate_chat(&mut errors, config);
    misc::validate_upload(&mut errors, config);
    misc::validate_notifications(&mut errors, config);
    misc::validate_colors(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
