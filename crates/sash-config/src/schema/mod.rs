//! Configuration schema types for sash.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with sensible defaults.

mod colors;
mod logging;
mod window;

pub use colors::*;
pub use logging::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for sash.
///
/// All options have sensible defaults matching current behavior.
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct SashConfig {
    pub window: WindowConfig,
    pub colors: ColorConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_correct_colors() {
        let config = SashConfig::default();
        assert_eq!(config.colors.background, "#000000");
        assert_eq!(config.colors.active_border, "#00ff00");
        assert_eq!(config.colors.inactive_border, "#cccccc");
    }

    #[test]
    fn default_config_has_correct_window() {
        let config = SashConfig::default();
        assert!((config.window.border_width - 1.0).abs() < f32::EPSILON);
        assert!((config.window.padding_width - 2.0).abs() < f32::EPSILON);
        assert!(!config.window.hide_single_pane_border);
    }

    #[test]
    fn empty_toml_parses_to_defaults() {
        let config: SashConfig = toml::from_str("").unwrap();
        assert_eq!(config.colors.background, "#000000");
        assert_eq!(config.logging.filter, "sash=info");
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let config: SashConfig = toml::from_str(
            r##"
[colors]
active_border = "#ff00ff"
"##,
        )
        .unwrap();
        assert_eq!(config.colors.active_border, "#ff00ff");
        assert_eq!(config.colors.inactive_border, "#cccccc");
        assert!((config.window.border_width - 1.0).abs() < f32::EPSILON);
    }
}
