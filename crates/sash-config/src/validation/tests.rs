//! Tests for the full validation pipeline.

use super::*;
use crate::schema::SashConfig;

#[test]
fn default_config_validates() {
    let config = SashConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_border_width_negative() {
    let mut config = SashConfig::default();
    config.window.border_width = -1.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("window.border_width"));
}

#[test]
fn catches_border_width_too_large() {
    let mut config = SashConfig::default();
    config.window.border_width = 250.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("window.border_width"));
}

#[test]
fn catches_padding_width_negative() {
    let mut config = SashConfig::default();
    config.window.padding_width = -0.5;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("window.padding_width"));
}

#[test]
fn zero_widths_validate() {
    let mut config = SashConfig::default();
    config.window.border_width = 0.0;
    config.window.padding_width = 0.0;
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_window_size_too_small() {
    let mut config = SashConfig::default();
    config.window.width = 10;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("window.width"));
}

#[test]
fn catches_invalid_color() {
    let mut config = SashConfig::default();
    config.colors.inactive_border = "chartreuse".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("colors.inactive_border"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = SashConfig::default();
    config.window.border_width = -1.0;
    config.colors.background = "nope".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("window.border_width"));
    assert!(err.contains("colors.background"));
}
