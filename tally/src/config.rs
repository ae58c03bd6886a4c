//! Window and logging preferences.
//!
//! Read from `config.json` in the platform config directory (or a path
//! given on the command line). Missing fields take their defaults, so a
//! file containing only `{"log_level": "debug"}` is valid.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tallycore::storage;

pub const APP_NAME: &str = "tally";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TallyConfig {
    /// Inner window width in points.
    pub window_width: f32,
    /// Inner window height in points.
    pub window_height: f32,
    /// Point size of the result display.
    pub display_font_size: f32,
    /// Height of one keypad key.
    pub key_height: f32,
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for TallyConfig {
    fn default() -> Self {
        Self {
            window_width: 420.0,
            window_height: 550.0,
            display_font_size: 30.0,
            key_height: 56.0,
            log_level: "warn".to_string(),
        }
    }
}

impl TallyConfig {
    pub fn default_path() -> PathBuf {
        storage::config_dir(APP_NAME).join("config.json")
    }

    /// Load from `path`, or from [`TallyConfig::default_path`] when `None`.
    /// A missing file yields the defaults; an unreadable one is an error.
    pub fn load(path: Option<&Path>) -> storage::Result<Self> {
        let path = path.map_or_else(Self::default_path, Path::to_path_buf);
        Ok(storage::load_optional(&path)?.unwrap_or_default())
    }

    pub fn save(&self, path: &Path) -> storage::Result<()> {
        storage::save_json(path, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = TallyConfig::load(Some(&dir.path().join("config.json"))).unwrap();
        assert_eq!(config, TallyConfig::default());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "log_level": "debug", "key_height": 40.0 }"#).unwrap();

        let config = TallyConfig::load(Some(&path)).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.key_height, 40.0);
        assert_eq!(config.window_width, TallyConfig::default().window_width);
    }

    #[test]
    fn broken_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "window_width = 3").unwrap();
        assert!(matches!(
            TallyConfig::load(Some(&path)),
            Err(storage::StorageError::Json(_))
        ));
    }

    #[test]
    fn save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tally").join("config.json");
        let config = TallyConfig {
            display_font_size: 24.0,
            ..TallyConfig::default()
        };

        config.save(&path).unwrap();
        assert_eq!(TallyConfig::load(Some(&path)).unwrap(), config);
    }
}
