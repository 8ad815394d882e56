use std::path::PathBuf;

use lawyer_common::PlatformError;

pub(super) const APP_NAME: &str = "ai-lawyer";

/// Returns the platform-specific configuration directory.
///
/// - macOS: `~/Library/Application Support/ai-lawyer`
/// - Linux: `$XDG_CONFIG_HOME/ai-lawyer` (defaults to `~/.config/ai-lawyer`)
/// - Windows: `%APPDATA%\ai-lawyer`
pub fn config_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::config_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine config directory".into()))?
        .join(APP_NAME))
}

/// Returns the platform-specific data directory.
///
/// - macOS: `~/Library/Application Support/ai-lawyer`
/// - Linux: `$XDG_DATA_HOME/ai-lawyer` (defaults to `~/.local/share/ai-lawyer`)
/// - Windows: `%APPDATA%\ai-lawyer`
pub fn data_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::data_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine data directory".into()))?
        .join(APP_NAME))
}

/// Returns the path to the main configuration file.
pub fn config_file() -> Result<PathBuf, PlatformError> {
    Ok(config_dir()?.join("config.toml"))
}

/// Returns the path to the log directory (`data_dir()/logs`).
pub fn log_dir() -> Result<PathBuf, PlatformError> {
    Ok(data_dir()?.join("logs"))
}

/// File the TUI writes its tracing output to.
pub fn log_file() -> Result<PathBuf, PlatformError> {
    Ok(log_dir()?.join("ai-lawyer.log"))
}

/// Returns the path to the crash report directory (`log_dir()/crash-reports`).
pub fn crash_report_dir() -> Result<PathBuf, PlatformError> {
    Ok(log_dir()?.join("crash-reports"))
}
