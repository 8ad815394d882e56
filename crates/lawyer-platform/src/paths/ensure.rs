use std::fs;

use lawyer_common::PlatformError;

use super::resolve::{config_dir, crash_report_dir, data_dir, log_dir};

/// Creates all application directories if they do not already exist.
///
/// Creates: config_dir, data_dir, log_dir, and crash_report_dir.
pub fn ensure_dirs() -> Result<(), PlatformError> {
    for dir in [config_dir()?, data_dir()?, log_dir()?, crash_report_dir()?] {
        fs::create_dir_all(&dir)
            .map_err(|e| PlatformError::PathError(format!("{}: {e}", dir.display())))?;
    }
    Ok(())
}
