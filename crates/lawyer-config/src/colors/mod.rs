//! Color parsing and validation utilities.
//!
//! Terminal colours are 24-bit, so only `#RRGGBB` and the `#RGB` shorthand
//! are accepted.

mod parse;

#[cfg(test)]
mod tests;

use lawyer_common::types::Color;
use lawyer_common::ConfigError;

use parse::{parse_hex, HEX_RE};

/// Parse a color string into a [`Color`].
pub fn parse_color(s: &str) -> Result<Color, ConfigError> {
    let s = s.trim();

    if s.starts_with('#') {
        if let Some(color) = parse_hex(s) {
            return Ok(color);
        }
        return Err(ConfigError::ParseError(format!("invalid hex color: {s}")));
    }

    Err(ConfigError::ParseError(format!(
        "unrecognized color format: {s}"
    )))
}

/// Validate that a string is a recognized color format.
pub fn validate_color(s: &str) -> bool {
    let s = s.trim();
    !s.is_empty() && HEX_RE.is_match(s)
}
