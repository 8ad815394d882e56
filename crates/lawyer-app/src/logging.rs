//! Tracing subscriber setup.
//!
//! One-shot commands log to stderr. The chat UI owns the terminal, so it
//! logs to a file in the data directory (or not at all).

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Crates whose events are shown by default.
const LOG_TARGETS: [&str; 4] = ["ai_lawyer", "lawyer_api", "lawyer_config", "lawyer_platform"];

/// Expand a bare level into per-crate directives.
///
/// Anything containing `=` or `,` is taken as a full directive list.
pub fn directives(level: &str) -> String {
    let level = level.trim();
    if level.contains('=') || level.contains(',') {
        return level.to_string();
    }
    LOG_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Pick the filter source: `--log-level`, then `RUST_LOG`, then the config.
pub fn select_directives(cli: Option<&str>, env: Option<&str>, config_level: &str) -> String {
    if let Some(level) = cli.filter(|l| !l.trim().is_empty()) {
        return directives(level);
    }
    if let Some(env) = env.filter(|e| !e.trim().is_empty()) {
        return env.trim().to_string();
    }
    directives(config_level)
}

fn build_filter(directives: &str) -> EnvFilter {
    let mut filter = EnvFilter::default();
    for directive in directives.split(',').filter(|d| !d.trim().is_empty()) {
        match directive.trim().parse() {
            Ok(d) => filter = filter.add_directive(d),
            Err(e) => eprintln!("ignoring log directive '{directive}': {e}"),
        }
    }
    filter
}

pub fn init_stderr(directives: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(directives))
        .with_writer(std::io::stderr)
        .init();
}

/// Append to `path`. Falls back to no logging if the file cannot be opened.
pub fn init_file(directives: &str, path: &Path) {
    let file = match OpenOptions::new().create(true).append(true).open(path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("cannot open log file {}: {e}", path.display());
            return;
        }
    };
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(directives))
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
}
