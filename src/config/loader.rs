//! Configuration file loading.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read the config file.
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional; missing fields fall back to hardcoded
/// defaults. Corresponds to `~/.config/comicframe/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Source page to rotate through.
    #[serde(default)]
    pub source_url: Option<String>,

    /// Seconds between fetch initiations.
    #[serde(default)]
    pub refresh_secs: Option<u64>,

    /// Frame-loop rate in frames per second.
    #[serde(default)]
    pub frame_rate: Option<u32>,

    /// Screen width in pixels.
    #[serde(default)]
    pub screen_width: Option<u32>,

    /// Screen height in pixels.
    #[serde(default)]
    pub screen_height: Option<u32>,

    /// Padding around the image box.
    #[serde(default)]
    pub padding: Option<u32>,

    /// Side length of the square image box.
    #[serde(default)]
    pub image_box: Option<u32>,

    /// Left edge of the text column.
    #[serde(default)]
    pub text_x: Option<i32>,

    /// Width budget for wrapped title lines.
    #[serde(default)]
    pub text_width: Option<u32>,

    /// Text size in pixels.
    #[serde(default)]
    pub text_size: Option<u32>,

    /// Maximum title lines before truncation.
    #[serde(default)]
    pub line_budget: Option<usize>,

    /// Path for tracing output.
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

/// Load the config file respecting precedence.
///
/// An explicitly passed path must exist and parse; the default path
/// (`~/.config/comicframe/config.toml`) is optional and silently skipped
/// when missing.
pub fn load_config_with_precedence(
    explicit: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    match explicit {
        Some(path) => load_config_file(&path).map(Some),
        None => match default_config_path() {
            Some(path) if path.exists() => load_config_file(&path).map(Some),
            _ => Ok(None),
        },
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("comicframe").join("config.toml"))
}

fn load_config_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|err| ConfigError::ReadError {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })?;
    toml::from_str(&raw).map_err(|err| ConfigError::ParseError {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })
}
