//! AI Lawyer configuration system.
//!
//! Provides TOML-based configuration with full validation. All config
//! sections use sensible defaults so partial configs work out of the box.
//! The backend URL can be overridden from the environment
//! (`AI_LAWYER_API_URL`) or the command line.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use lawyer_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod colors;
pub mod keybinds;
pub mod schema;
pub mod toml_loader;
pub mod validation;

// Re-export core types for convenience
pub use schema::{LawyerConfig, CONFIG_SCHEMA_VERSION};

use lawyer_common::ConfigError;
use std::path::Path;

/// Environment variable that overrides `api.base_url`.
pub const API_URL_ENV: &str = "AI_LAWYER_API_URL";

/// Convenience function to load config from the platform default path.
///
/// Loads `config.toml` from the OS config directory, creates a default
/// if none exists, applies environment overrides, and validates the result.
pub fn load_config() -> Result<LawyerConfig, ConfigError> {
    let mut config = toml_loader::load_default()?;
    apply_env_overrides(&mut config);
    validation::validate(&config)?;
    Ok(config)
}

/// Load config from an explicit path. Unlike [`load_config`], a missing
/// file is an error rather than a reason to write a default.
pub fn load_config_from(path: &Path) -> Result<LawyerConfig, ConfigError> {
    let mut config = toml_loader::load_from_path(path)?;
    apply_env_overrides(&mut config);
    validation::validate(&config)?;
    Ok(config)
}

/// Apply overrides taken from the process environment.
pub fn apply_env_overrides(config: &mut LawyerConfig) {
    if let Ok(url) = std::env::var(API_URL_ENV) {
        if apply_api_url(config, &url) {
            tracing::debug!("api.base_url overridden by {API_URL_ENV}");
        }
    }
}

/// Replace `api.base_url`. Blank values are ignored; returns whether the
/// config changed.
pub fn apply_api_url(config: &mut LawyerConfig, url: &str) -> bool {
    let url = url.trim();
    if url.is_empty() {
        return false;
    }
    config.api.base_url = url.to_string();
    true
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &LawyerConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
