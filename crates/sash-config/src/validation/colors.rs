//! Color configuration validation.

use crate::colors::validate_color;
use crate::schema::SashConfig;

/// Validate that every configured color string is a recognized format.
pub(crate) fn validate_colors(errors: &mut Vec<String>, config: &SashConfig) {
    let checks = [
        ("colors.background", &config.colors.background),
        ("colors.active_border", &config.colors.active_border),
        ("colors.inactive_border", &config.colors.inactive_border),
    ];

    for (name, value) in checks {
        if !validate_color(value) {
            errors.push(format!("{name} = {value:?} is not a valid color"));
        }
    }
}
