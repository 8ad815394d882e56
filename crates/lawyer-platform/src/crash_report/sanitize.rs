use std::sync::LazyLock;

use regex::Regex;

/// Patterns scrubbed from panic messages and backtraces, most specific
/// first. The replacement may reference capture group 1 to keep a prefix.
static REDACTIONS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    let table: &[(&str, &str)] = &[
        // Backend session ids (and anything else UUID-shaped).
        (
            r"(?i)\b[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}\b",
            "[SESSION]",
        ),
        (r#"("session_id"\s*:\s*)"[^"]*""#, "${1}\"[SESSION]\""),
        (r"Bearer [a-zA-Z0-9._\-]+", "Bearer [REDACTED]"),
        (r"sk-[a-zA-Z0-9_\-]{20,}", "[REDACTED]"),
        (
            r"(?i)((?:api_key|apikey|key|token|secret|password)=)[^\s&]{8,}",
            "${1}[REDACTED]",
        ),
        // The user's home directory leaks through document paths.
        (r"(/(?:home|Users)/)[^/\s]+", "${1}[USER]"),
    ];
    table
        .iter()
        .filter_map(|(pattern, replacement)| match Regex::new(pattern) {
            Ok(re) => Some((re, *replacement)),
            Err(e) => {
                tracing::error!("crash_report: bad redaction pattern {pattern}: {e}");
                None
            }
        })
        .collect()
});

/// Redacts session ids, credentials and user home paths from `input`.
pub fn sanitize_secrets(input: &str) -> String {
    REDACTIONS
        .iter()
        .fold(input.to_string(), |acc, (re, replacement)| {
            re.replace_all(&acc, *replacement).into_owned()
        })
}
