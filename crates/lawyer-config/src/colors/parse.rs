//! Internal color parsing helpers.

use lawyer_common::types::Color;
use regex::Regex;
use std::sync::LazyLock;

/// Regex for hex color: #RGB or #RRGGBB.
pub(crate) static HEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").unwrap());

/// Parse a hex color string (#RGB or #RRGGBB).
pub(super) fn parse_hex(s: &str) -> Option<Color> {
    if !HEX_RE.is_match(s) {
        return None;
    }
    Color::from_hex(s)
}
