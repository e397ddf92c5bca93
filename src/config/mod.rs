// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language
//! - `[canvas]` - Pencil/eraser colors, brush width and start-up tool
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` or set `TIFFANY_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use tiffany::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, _warning) = config::load();
//!
//! let brush = config.canvas.brush();
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::canvas::{BrushWidth, CanvasMode, PaintColor};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Canvas tool settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CanvasConfig {
    /// Pencil color as `#rrggbb`.
    #[serde(default = "default_foreground", skip_serializing_if = "Option::is_none")]
    pub foreground_color: Option<String>,

    /// Eraser and area-fill color as `#rrggbb`.
    #[serde(default = "default_background", skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,

    /// Brush width in pixels; snapped to the nearest offered width.
    #[serde(default = "default_brush_width", skip_serializing_if = "Option::is_none")]
    pub brush_width: Option<u32>,

    /// Tool selected at start-up (`pointer`, `draw`, `erase`, `fill`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_mode: Option<String>,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            foreground_color: default_foreground(),
            background_color: default_background(),
            brush_width: default_brush_width(),
            default_mode: Some(CanvasMode::default().as_str().to_string()),
        }
    }
}

impl CanvasConfig {
    /// Resolved pencil color, falling back to the default on invalid input.
    #[must_use]
    pub fn foreground(&self) -> PaintColor {
        resolve_color(self.foreground_color.as_deref(), DEFAULT_FOREGROUND_COLOR)
    }

    /// Resolved eraser/fill color, falling back to the default on invalid input.
    #[must_use]
    pub fn background(&self) -> PaintColor {
        resolve_color(self.background_color.as_deref(), DEFAULT_BACKGROUND_COLOR)
    }

    #[must_use]
    pub fn brush(&self) -> BrushWidth {
        BrushWidth::nearest(self.brush_width.unwrap_or(DEFAULT_BRUSH_WIDTH))
    }

    #[must_use]
    pub fn mode(&self) -> CanvasMode {
        self.default_mode
            .as_deref()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default()
    }
}

fn resolve_color(raw: Option<&str>, fallback: &str) -> PaintColor {
    raw.and_then(PaintColor::from_hex)
        .or_else(|| PaintColor::from_hex(fallback))
        .unwrap_or(PaintColor::BLACK)
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Canvas tool settings.
    #[serde(default)]
    pub canvas: CanvasConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_foreground() -> Option<String> {
    Some(DEFAULT_FOREGROUND_COLOR.to_string())
}

fn default_background() -> Option<String> {
    Some(DEFAULT_BACKGROUND_COLOR.to_string())
}

fn default_brush_width() -> Option<u32> {
    Some(DEFAULT_BRUSH_WIDTH)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("Failed to load {}: {}", path.display(), err);
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
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

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
            },
            canvas: CanvasConfig {
                foreground_color: Some("#ff0000".to_string()),
                background_color: Some("#eeeeee".to_string()),
                brush_width: Some(8),
                default_mode: Some("fill".to_string()),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
        assert_eq!(loaded.canvas.mode(), CanvasMode::Fill);
        assert_eq!(loaded.canvas.brush(), BrushWidth::Px8);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(message)) => assert!(!message.is_empty()),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn load_with_override_warns_on_invalid_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[canvas\nbroken")
            .expect("failed to write invalid toml");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn load_with_override_missing_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().join("absent")));

        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn missing_fields_use_defaults() {
        let config: Config = toml::from_str("[general]\nlanguage = \"fr\"\n").expect("parse");

        assert_eq!(config.canvas.foreground(), PaintColor::BLACK);
        assert_eq!(config.canvas.background(), PaintColor::WHITE);
        assert_eq!(config.canvas.brush(), BrushWidth::Px1);
        assert_eq!(config.canvas.mode(), CanvasMode::Pointer);
    }

    #[test]
    fn invalid_canvas_values_fall_back() {
        let canvas = CanvasConfig {
            foreground_color: Some("not-a-color".to_string()),
            background_color: None,
            brush_width: Some(5),
            default_mode: Some("lasso".to_string()),
        };

        assert_eq!(canvas.foreground(), PaintColor::BLACK);
        assert_eq!(canvas.background(), PaintColor::WHITE);
        assert_eq!(canvas.brush(), BrushWidth::Px4);
        assert_eq!(canvas.mode(), CanvasMode::Pointer);
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }
}
