//! Full configuration validation.
//!
//! Validates numeric ranges and color formats. Each domain has its own
//! submodule; this orchestrator calls them all and collects errors into
//! a single `ConfigError`.

mod colors;
mod helpers;
mod window;

#[cfg(test)]
mod tests;

use crate::schema::SashConfig;
use sash_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &SashConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    window::validate_window(&mut errors, config);
    colors::validate_colors(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
