//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Sash Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[window]
# title = "Sash"
# width = 1280
# height = 800
# border_width = 1.0     # points, 0.0-100.0; 0 disables pane borders
# padding_width = 2.0    # points, 0.0-100.0; 0 disables the padding fill
# hide_single_pane_border = false

[colors]
# background = "#000000"
# active_border = "#00ff00"
# inactive_border = "#cccccc"

[logging]
# filter = "sash=info"
"##
    .to_string()
}
