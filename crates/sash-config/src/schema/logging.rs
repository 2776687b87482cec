//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Tracing filter configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Env-filter directive, e.g. `sash=debug` or `sash_renderer=trace`.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "sash=info".into(),
        }
    }
}
