//! Application configuration.
//!
//! ## Learning: Serde for Serialization
//!
//! `#[derive(Serialize, Deserialize)]` generates the TOML conversion code.
//! `#[serde(default)]` fills missing fields from `Default::default()`, so a
//! config file only needs the keys a user wants to change.
//!
//! The file is read once at startup and never written by the application.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::engine::Operand;

/// Matrix shown in the A area by the Example action.
pub const EXAMPLE_A: &str = "1 2 3\n4 5 6\n7 8 9";

/// Matrix shown in the B area by the Example action.
pub const EXAMPLE_B: &str = "9 8 7\n6 5 4\n3 2 1";

/// Main application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// UI appearance settings
    pub ui: UiConfig,

    /// Initial session settings
    pub session: SessionConfig,
}

impl Config {
    /// Loads config from the default location, falling back to defaults.
    pub fn load() -> Self {
        match Self::load_from_default_path() {
            Ok(config) => config,
            Err(e) => {
                warn!("Ignoring configuration: {}", e);
                Self::default()
            }
        }
    }

    /// Loads config from a file.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml(&content)
    }

    /// Parses config from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    fn load_from_default_path() -> Result<Self, ConfigError> {
        let path = Self::default_path()?;
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Returns the default config file path.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("matrixtool").join("config.toml"))
    }
}

/// UI appearance configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Built-in color theme
    pub theme: ThemeKind,

    /// Font size in points
    pub font_size: f32,

    /// Initial window width
    pub window_width: f32,

    /// Initial window height
    pub window_height: f32,

    /// Optional JSON theme file overriding `theme`
    pub custom_theme: Option<PathBuf>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: ThemeKind::Dark,
            font_size: 14.0,
            window_width: 1000.0,
            window_height: 700.0,
            custom_theme: None,
        }
    }
}

/// Built-in theme choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKind {
    #[default]
    Dark,
    Light,
}

/// Initial session settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Operand used by Transpose and Determinant at startup
    pub default_operand: Operand,

    /// Text placed in A by the Example action
    pub example_a: String,

    /// Text placed in B by the Example action
    pub example_b: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            default_operand: Operand::A,
            example_a: EXAMPLE_A.to_string(),
            example_b: EXAMPLE_B.to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}
