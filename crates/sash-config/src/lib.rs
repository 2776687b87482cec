//! Sash configuration system.
//!
//! Provides TOML-based configuration with live reload and full validation.
//! All config sections use sensible defaults so partial configs work out
//! of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use sash_config::load_config;
//!
//! let config = load_config().expect("failed to load config");
//! println!("border width: {}pt", config.window.border_width);
//! ```

pub mod colors;
pub mod reload;
pub mod schema;
pub mod toml_loader;
pub mod validation;
pub mod watcher;

// Re-export core types for convenience
pub use colors::{parse_color, Palette};
pub use reload::ReloadManager;
pub use schema::{SashConfig, CONFIG_SCHEMA_VERSION};
pub use watcher::ConfigWatcher;

use sash_common::ConfigError;

/// Convenience function to load config from the platform default path.
///
/// Loads `config.toml` from the OS config directory, creates a default
/// if none exists, and validates the result.
pub fn load_config() -> Result<SashConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let config = SashConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: SashConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.colors.background, "#000000");
        assert!((parsed.window.border_width - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn default_config_resolves_to_palette() {
        let config = SashConfig::default();
        assert!(Palette::resolve(&config.colors).is_ok());
    }
}
