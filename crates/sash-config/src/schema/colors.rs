//! Color configuration types.

use serde::{Deserialize, Serialize};

/// Colors used by the rectangle compositor.
///
/// Values are color strings in `#RRGGBB`, `#RRGGBBAA`, or `rgba(r,g,b,a)`
/// form, resolved to packed colors once per configuration load.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    /// Fill for blank regions and pane padding.
    pub background: String,
    /// Border stroke for the focused pane.
    pub active_border: String,
    /// Border stroke for all other panes.
    pub inactive_border: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            background: "#000000".into(),
            active_border: "#00ff00".into(),
            inactive_border: "#cccccc".into(),
        }
    }
}
