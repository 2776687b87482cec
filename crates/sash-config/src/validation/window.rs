//! Window configuration validation (frame widths, startup size).

use crate::schema::SashConfig;

use super::helpers::{validate_range, validate_range_f32};

/// Validate all window-related constraints.
pub(crate) fn validate_window(errors: &mut Vec<String>, config: &SashConfig) {
    validate_range_f32(
        errors,
        "window.border_width",
        config.window.border_width,
        0.0,
        100.0,
    );
    validate_range_f32(
        errors,
        "window.padding_width",
        config.window.padding_width,
        0.0,
        100.0,
    );
    validate_range(errors, "window.width", config.window.width, 200, 16384);
    validate_range(errors, "window.height", config.window.height, 200, 16384);
}
