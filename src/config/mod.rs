// SPDX-License-Identifier: MPL-2.0
//! Loading and saving toast defaults from a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[toasts]` - Duration, anchor position, capacity, spacing and layer
//!
//! Every key is optional; missing keys take the values in [`defaults`].
//!
//! # Examples
//!
//! ```no_run
//! use iced_toast::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! config.toasts.max_toasts = Some(3);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::notifications::Position;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Toast defaults, merged with per-call overrides.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToastConfig {
    /// Auto-dismiss delay in milliseconds; `0` disables auto-dismiss.
    #[serde(
        default = "default_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_duration_ms: Option<u64>,

    /// Anchor used when a toast doesn't request one.
    #[serde(default = "default_position", skip_serializing_if = "Option::is_none")]
    pub default_position: Option<Position>,

    /// Maximum number of live toasts before the oldest is evicted.
    #[serde(default = "default_max_toasts", skip_serializing_if = "Option::is_none")]
    pub max_toasts: Option<usize>,

    /// Gap between stacked toasts.
    #[serde(default = "default_spacing", skip_serializing_if = "Option::is_none")]
    pub spacing: Option<f32>,

    /// Stacking layer of the toast containers.
    #[serde(default = "default_z_index", skip_serializing_if = "Option::is_none")]
    pub z_index: Option<i32>,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            default_duration_ms: default_duration_ms(),
            default_position: default_position(),
            max_toasts: default_max_toasts(),
            spacing: default_spacing(),
            z_index: default_z_index(),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub toasts: ToastConfig,
}

fn default_duration_ms() -> Option<u64> {
    Some(DEFAULT_DURATION_MS)
}

fn default_position() -> Option<Position> {
    Some(Position::default())
}

fn default_max_toasts() -> Option<usize> {
    Some(DEFAULT_MAX_TOASTS)
}

fn default_spacing() -> Option<f32> {
    Some(DEFAULT_SPACING)
}

fn default_z_index() -> Option<i32> {
    Some(DEFAULT_Z_INDEX)
}

// =============================================================================
// Load Functions
// =============================================================================

fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default location.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => {
                    tracing::debug!(path = %path.display(), "loaded toast configuration");
                    return (config, None);
                }
                Err(err) => {
                    return (
                        Config::default(),
                        Some(format!("failed to load {}: {err}", path.display())),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_config_has_expected_values() {
        let config = ToastConfig::default();
        assert_eq!(config.default_duration_ms, Some(DEFAULT_DURATION_MS));
        assert_eq!(config.default_position, Some(Position::TopRight));
        assert_eq!(config.max_toasts, Some(DEFAULT_MAX_TOASTS));
        assert_eq!(config.spacing, Some(DEFAULT_SPACING));
        assert_eq!(config.z_index, Some(DEFAULT_Z_INDEX));
    }

    #[test]
    fn save_and_load_preserves_settings() {
        let config = Config {
            toasts: ToastConfig {
                default_duration_ms: Some(0),
                default_position: Some(Position::BottomCenter),
                max_toasts: Some(2),
                spacing: Some(4.0),
                z_index: Some(10),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("nested").join(CONFIG_FILE);

        save_to_path(&config, &path).expect("failed to save config");
        let loaded = load_from_path(&path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_keys_take_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&path, "[toasts]\nmax_toasts = 2\n").expect("failed to write config");

        let loaded = load_from_path(&path).expect("failed to load config");
        assert_eq!(loaded.toasts.max_toasts, Some(2));
        assert_eq!(loaded.toasts.default_duration_ms, Some(DEFAULT_DURATION_MS));
        assert_eq!(loaded.toasts.default_position, Some(Position::TopRight));
    }

    #[test]
    fn positions_use_kebab_case() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&path, "[toasts]\ndefault_position = \"bottom-left\"\n")
            .expect("failed to write config");

        let loaded = load_from_path(&path).expect("failed to load config");
        assert_eq!(loaded.toasts.default_position, Some(Position::BottomLeft));
    }

    #[test]
    fn load_with_override_from_missing_file_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none(), "should not warn for missing file");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "not = valid = toml")
            .expect("failed to write invalid toml");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_some(), "should warn about parse error");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn save_with_override_writes_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base = temp_dir.path().join("cfg");

        save_with_override(&Config::default(), Some(base.clone())).expect("save should work");
        assert!(base.join(CONFIG_FILE).exists());
    }
}
