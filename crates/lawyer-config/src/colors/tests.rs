//! Tests for color parsing and validation.

use super::*;

#[test]
fn parse_hex_6_digit() {
    let c = parse_color("#00d4ff").unwrap();
    assert_eq!(c, Color::rgb(0, 212, 255));
}

#[test]
fn parse_hex_3_digit() {
    let c = parse_color("#f00").unwrap();
    assert_eq!(c, Color::rgb(255, 0, 0));
}

#[test]
fn parse_trims_whitespace() {
    let c = parse_color("  #ffffff ").unwrap();
    assert_eq!(c, Color::rgb(255, 255, 255));
}

#[test]
fn parse_rejects_bad_hex() {
    let err = parse_color("#12345g").unwrap_err().to_string();
    assert!(err.contains("invalid hex color"));
}

#[test]
fn parse_rejects_named_colors() {
    let err = parse_color("red").unwrap_err().to_string();
    assert!(err.contains("unrecognized color format"));
}

#[test]
fn parse_rejects_alpha_hex() {
    assert!(parse_color("#00d4ff80").is_err());
}

#[test]
fn validate_accepts_supported_formats() {
    assert!(validate_color("#abc"));
    assert!(validate_color("#AABBCC"));
}

#[test]
fn validate_rejects_everything_else() {
    assert!(!validate_color(""));
    assert!(!validate_color("abc"));
    assert!(!validate_color("rgba(0,0,0,1)"));
    assert!(!validate_color("#abcd"));
}
