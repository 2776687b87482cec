//! Window and pane-frame configuration types.

use serde::{Deserialize, Serialize};

/// Window appearance and pane-frame settings.
///
/// Widths are in points; the renderer converts them to device pixels
/// once per configuration load using the current display scale.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Static window title.
    pub title: String,
    /// Logical startup width in pixels.
    pub width: u32,
    /// Logical startup height in pixels.
    pub height: u32,
    /// Border stroke width around each pane, in points. 0 disables borders.
    pub border_width: f32,
    /// Background fill width between pane content and its border, in points.
    /// 0 disables the padding fill.
    pub padding_width: f32,
    /// Skip the border stroke when a single pane fills the screen.
    pub hide_single_pane_border: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Sash".into(),
            width: 1280,
            height: 800,
            border_width: 1.0,
            padding_width: 2.0,
            hide_single_pane_border: false,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_config_defaults() {
        let config = WindowConfig::default();
        assert_eq!(config.title, "Sash");
        assert_eq!(config.width, 1280);
        assert_eq!(config.height, 800);
        assert!((config.border_width - 1.0).abs() < f32::EPSILON);
        assert!((config.padding_width - 2.0).abs() < f32::EPSILON);
        assert!(!config.hide_single_pane_border);
    }

    #[test]
    fn window_config_partial_toml() {
        let toml_str = r#"
title = "My Terminal"
border_width = 0.5
hide_single_pane_border = true
"#;
        let config: WindowConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.title, "My Terminal");
        assert!((config.border_width - 0.5).abs() < f32::EPSILON);
        assert!(config.hide_single_pane_border);
        // Defaults preserved
        assert!((config.padding_width - 2.0).abs() < f32::EPSILON);
        assert_eq!(config.width, 1280);
    }

    #[test]
    fn zero_widths_are_representable() {
        let config: WindowConfig = toml::from_str("border_width = 0.0\npadding_width = 0.0").unwrap();
        assert_eq!(config.border_width, 0.0);
        assert_eq!(config.padding_width, 0.0);
    }
}
