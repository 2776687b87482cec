//! Tests for color parsing and palette resolution.

use super::*;
use sash_common::types::Color;

#[test]
fn parse_hex_6() {
    let c = parse_color("#00ff00").unwrap();
    assert_eq!(c, Color::from_rgba(0, 255, 0, 255));
}

#[test]
fn parse_hex_8() {
    let c = parse_color("#00ff0080").unwrap();
    assert_eq!(c, Color::from_rgba(0, 255, 0, 128));
}

#[test]
fn parse_hex_3_expands() {
    let c = parse_color("#fa0").unwrap();
    assert_eq!(c, Color::from_rgba(255, 170, 0, 255));
}

#[test]
fn parse_hex_trims_whitespace() {
    let c = parse_color("  #112233  ").unwrap();
    assert_eq!(c, Color::from_rgba(0x11, 0x22, 0x33, 255));
}

#[test]
fn parse_rgba_float_alpha() {
    let c = parse_color("rgba(10, 20, 30, 0.5)").unwrap();
    assert_eq!(c, Color::from_rgba(10, 20, 30, 128));
}

#[test]
fn parse_rgba_int_alpha() {
    let c = parse_color("rgba(10,20,30,255)").unwrap();
    assert_eq!(c, Color::from_rgba(10, 20, 30, 255));
}

#[test]
fn parse_invalid_hex_errors() {
    assert!(parse_color("#zzzzzz").is_err());
    assert!(parse_color("#12345").is_err());
}

#[test]
fn parse_unknown_format_errors() {
    assert!(parse_color("green").is_err());
    assert!(parse_color("").is_err());
}

#[test]
fn validate_color_accepts_known_formats() {
    assert!(validate_color("#00ff00"));
    assert!(validate_color("#00ff0080"));
    assert!(validate_color("rgba(0,255,0,0.5)"));
}

#[test]
fn validate_color_rejects_garbage() {
    assert!(!validate_color(""));
    assert!(!validate_color("green"));
    assert!(!validate_color("#12"));
    assert!(!validate_color("rgba(0,255,0)"));
}

#[test]
fn palette_resolves_defaults() {
    let palette = Palette::resolve(&crate::schema::ColorConfig::default()).unwrap();
    assert_eq!(palette.background, Color::from_rgba(0, 0, 0, 255));
    assert_eq!(palette.active_border, Color::from_rgba(0, 255, 0, 255));
    assert_eq!(palette.inactive_border, Color::from_rgba(0xcc, 0xcc, 0xcc, 255));
}

#[test]
fn palette_resolve_reports_bad_color() {
    let mut config = crate::schema::ColorConfig::default();
    config.active_border = "not-a-color".into();
    let err = Palette::resolve(&config).unwrap_err();
    assert!(err.to_string().contains("not-a-color"));
}
