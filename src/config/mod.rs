//! # Configuration
//!
//! Wump.2 reads an optional TOML file (default `wump2.toml`). Every section and field
//! has a default, so a partial file, or no file at all, is fine.
//!
//! - [`GameConfig`] - how many levels to play, intro sequence, fixed seed
//! - [`PresentationConfig`] - where the ASCII art lives, screen clearing, pauses
//! - [`LoggingConfig`] - log level and optional log file
//!
//! ```toml
//! [game]
//! levels = 4
//! intro = true
//! # seed = 1234
//!
//! [presentation]
//! assets_dir = "assets"
//! clear_screen = true
//! pause_scale = 1.0
//!
//! [logging]
//! level = "warn"
//! # file = "wump2.log"
//! ```
//!
//! Precedence: CLI flags > config file > defaults.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub presentation: PresentationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameConfig {
    /// Number of levels to play, clamped to the roster size.
    #[serde(default = "default_levels")]
    pub levels: usize,
    /// Play the title sequence before the menu.
    #[serde(default = "default_true")]
    pub intro: bool,
    /// Fixed RNG seed for reproducible caves. Unset = fresh entropy each run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

fn default_levels() -> usize {
    4
}

fn default_true() -> bool {
    true
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            levels: default_levels(),
            intro: true,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PresentationConfig {
    #[serde(default = "default_assets_dir")]
    pub assets_dir: String,
    #[serde(default = "default_true")]
    pub clear_screen: bool,
    /// Multiplier for narrative pauses; 0 disables them.
    #[serde(default = "default_pause_scale")]
    pub pause_scale: f32,
}

fn default_assets_dir() -> String {
    "assets".to_string()
}

fn default_pause_scale() -> f32 {
    1.0
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            assets_dir: default_assets_dir(),
            clear_screen: true,
            pause_scale: default_pause_scale(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Parsed level filter. Unknown names fall back to `warn`.
    pub fn level_filter(&self) -> log::LevelFilter {
        self.level
            .parse::<log::LevelFilter>()
            .unwrap_or(log::LevelFilter::Warn)
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path, e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file {}: {}", path, e))?;

        Ok(config)
    }

    /// Create a default configuration file
    pub fn create_default(path: &str) -> Result<()> {
        let config = Config::default();
        let content = toml::to_string_pretty(&config)
            .map_err(|e| anyhow!("Failed to serialize default config: {}", e))?;

        fs::write(path, content)
            .map_err(|e| anyhow!("Failed to write config file {}: {}", path, e))?;

        Ok(())
    }
}
