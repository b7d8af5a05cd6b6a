//! Application configuration.

use kurbo::Point;
use polydraw_core::Rgba;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Environment variable naming an optional JSON configuration file.
pub const CONFIG_ENV_VAR: &str = "POLYDRAW_CONFIG";

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub background_color: Rgba,
    pub selection_color: Rgba,
    /// Fixed world position for new figures. `None` places them at the
    /// center of the window.
    pub spawn_point: Option<[f64; 2]>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "PolyDraw - commands in console".to_string(),
            width: 1200,
            height: 800,
            background_color: Rgba::new(50, 50, 50, 255),
            selection_color: Rgba::red(),
            spawn_point: None,
        }
    }
}

impl AppConfig {
    /// Parse a configuration from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Load from the file named by `POLYDRAW_CONFIG`, or use the defaults.
    ///
    /// A file that cannot be read or parsed is reported and ignored.
    pub fn from_env() -> Self {
        let Ok(path) = std::env::var(CONFIG_ENV_VAR) else {
            return Self::default();
        };
        match Self::load(&path) {
            Ok(config) => {
                log::info!("Loaded config from {path}");
                config
            }
            Err(e) => {
                log::warn!("{e} ({path}), using defaults");
                Self::default()
            }
        }
    }

    /// Configured spawn point, if fixed.
    pub fn fixed_spawn_point(&self) -> Option<Point> {
        self.spawn_point.map(|[x, y]| Point::new(x, y))
    }
}
