use std::backtrace::Backtrace;
use std::panic::PanicHookInfo;
use std::path::{Path, PathBuf};

use crate::paths::crash_report_dir;

use super::sanitize::sanitize_secrets;

/// Writes a crash report for a panic into the crash report directory.
///
/// Runs inside a panic hook, so every failure is swallowed and reported
/// as `None`.
pub fn write_crash_report(info: &PanicHookInfo) -> Option<PathBuf> {
    let message = if let Some(s) = info.payload().downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = info.payload().downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    };

    let location = info
        .location()
        .map(|loc| format!("{}:{}:{}", loc.file(), loc.line(), loc.column()));

    let backtrace = Backtrace::force_capture().to_string();
    write_report_to(&crash_report_dir().ok()?, &message, location.as_deref(), &backtrace)
}

/// Serializes a sanitized report as `crash_<timestamp>.json` under `dir`.
pub fn write_report_to(
    dir: &Path,
    message: &str,
    location: Option<&str>,
    backtrace: &str,
) -> Option<PathBuf> {
    let now = chrono::Utc::now();
    let path = dir.join(format!("crash_{}.json", now.format("%Y%m%d_%H%M%S")));

    let report = serde_json::json!({
        "timestamp": now.to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "os": std::env::consts::OS,
        "arch": std::env::consts::ARCH,
        "panic_message": sanitize_secrets(message),
        "location": location,
        "backtrace": sanitize_secrets(backtrace),
    });

    std::fs::create_dir_all(dir).ok()?;
    std::fs::write(&path, serde_json::to_string_pretty(&report).ok()?).ok()?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let _ = std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o600));
    }

    Some(path)
}
