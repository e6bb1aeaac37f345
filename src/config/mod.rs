//! Configuration with full precedence handling.
//!
//! Resolution order: hardcoded defaults → TOML config file →
//! `COMICFRAME_*` environment variables → CLI flags. The resolved struct
//! is passed explicitly into the app; nothing reads process-wide state
//! after startup.

pub mod loader;

pub use loader::{load_config_with_precedence, ConfigError, ConfigFile};

use std::path::PathBuf;

/// Fully resolved application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Source page to rotate through.
    pub source_url: String,
    /// Seconds between fetch initiations.
    pub refresh_secs: u64,
    /// Frame-loop rate in frames per second.
    pub frame_rate: u32,
    /// Screen width in pixels.
    pub screen_width: u32,
    /// Screen height in pixels.
    pub screen_height: u32,
    /// Padding around the image box, in pixels.
    pub padding: u32,
    /// Side length of the square image box; also the image scale limit.
    pub image_box: u32,
    /// Left edge of the text column.
    pub text_x: i32,
    /// Width budget for wrapped title lines.
    pub text_width: u32,
    /// Text size in pixels.
    pub text_size: u32,
    /// Maximum title lines before truncation.
    pub line_budget: usize,
    /// Path for tracing output.
    pub log_file: PathBuf,
    /// Exit after the first successful fetch has been rendered.
    pub once: bool,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            source_url: "https://xkcd.com/".to_string(),
            refresh_secs: 60,
            frame_rate: 30,
            screen_width: 400,
            screen_height: 240,
            padding: 20,
            image_box: 200,
            text_x: 240,
            text_width: 140,
            text_size: 20,
            line_budget: 6,
            log_file: default_log_path(),
            once: false,
        }
    }
}

/// Default log location: the user's local data dir, falling back to the
/// system temp dir.
fn default_log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("comicframe")
        .join("comicframe.log")
}

/// Merge an optional config file over the defaults.
pub fn merge_config(file: Option<ConfigFile>) -> ResolvedConfig {
    let mut config = ResolvedConfig::default();
    let Some(file) = file else {
        return config;
    };

    if let Some(source_url) = file.source_url {
        config.source_url = source_url;
    }
    if let Some(refresh_secs) = file.refresh_secs {
        config.refresh_secs = refresh_secs;
    }
    if let Some(frame_rate) = file.frame_rate {
        config.frame_rate = frame_rate;
    }
    if let Some(screen_width) = file.screen_width {
        config.screen_width = screen_width;
    }
    if let Some(screen_height) = file.screen_height {
        config.screen_height = screen_height;
    }
    if let Some(padding) = file.padding {
        config.padding = padding;
    }
    if let Some(image_box) = file.image_box {
        config.image_box = image_box;
    }
    if let Some(text_x) = file.text_x {
        config.text_x = text_x;
    }
    if let Some(text_width) = file.text_width {
        config.text_width = text_width;
    }
    if let Some(text_size) = file.text_size {
        config.text_size = text_size;
    }
    if let Some(line_budget) = file.line_budget {
        config.line_budget = line_budget;
    }
    if let Some(log_file) = file.log_file {
        config.log_file = log_file;
    }

    config
}

/// Apply `COMICFRAME_*` environment variable overrides.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(source_url) = std::env::var("COMICFRAME_SOURCE_URL") {
        config.source_url = source_url;
    }
    if let Some(refresh_secs) = env_u64("COMICFRAME_REFRESH_SECS") {
        config.refresh_secs = refresh_secs;
    }
    if let Ok(log_file) = std::env::var("COMICFRAME_LOG_FILE") {
        config.log_file = PathBuf::from(log_file);
    }
    config
}

fn env_u64(name: &str) -> Option<u64> {
    std::env::var(name).ok().and_then(|value| value.parse().ok())
}

/// Apply CLI overrides; these win over every other source.
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    source_url: Option<String>,
    refresh_secs: Option<u64>,
    once: bool,
) -> ResolvedConfig {
    if let Some(source_url) = source_url {
        config.source_url = source_url;
    }
    if let Some(refresh_secs) = refresh_secs {
        config.refresh_secs = refresh_secs;
    }
    if once {
        config.once = true;
    }
    config
}
