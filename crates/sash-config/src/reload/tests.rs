//! Tests for the reload manager.

use super::*;
use std::path::PathBuf;

#[tokio::test]
async fn start_with_nonexistent_path_uses_defaults() {
    let path = PathBuf::from("/tmp/nonexistent_sash_reload_test.toml");
    let (config, _rx) = ReloadManager::start(path).await;
    assert_eq!(config.colors.background, "#000000");
    assert!((config.window.border_width - 1.0).abs() < f32::EPSILON);
}

#[tokio::test]
async fn start_with_valid_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r##"
[colors]
active_border = "#123456"
"##,
    )
    .unwrap();

    let (config, _rx) = ReloadManager::start(path).await;
    assert_eq!(config.colors.active_border, "#123456");
    assert_eq!(config.colors.background, "#000000"); // default
}
