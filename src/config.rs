//! Display settings for the solver. They can be given in a TOML file, and any
//! of them can be overridden on the command line:
//!
//! ```toml
//! fps = 10
//! spot-size = 30
//! margin-size = 5
//! graphics = true
//! ```

use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::debug;

pub const DEFAULT_FPS: u32 = 3;
pub const DEFAULT_SPOT_SIZE: u32 = 60;
pub const DEFAULT_MARGIN_SIZE: u32 = 5;
pub const MAX_FPS: u32 = 1000;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path:?}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct DisplayConfig {
    /// Search steps (and repaints) per second
    pub fps: u32,
    /// Size of a spot in pixels
    pub spot_size: u32,
    /// Gap between spots in pixels
    pub margin_size: u32,
    /// Whether to draw the board at all
    pub graphics: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            fps: DEFAULT_FPS,
            spot_size: DEFAULT_SPOT_SIZE,
            margin_size: DEFAULT_MARGIN_SIZE,
            graphics: true,
        }
    }
}

/// Values given on the command line, each one replaces the corresponding
/// value from the config file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayOverrides {
    pub fps: Option<u32>,
    pub spot_size: Option<u32>,
    pub margin_size: Option<u32>,
    pub graphics: Option<bool>,
}

impl DisplayConfig {
    pub fn from_toml(text: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&text, path)?;
        debug!(path = ?path, config = ?config, "loaded display config");
        Ok(config)
    }

    /// Start from the file at `path` (or the defaults when there is none),
    /// apply the overrides and validate the result.
    pub fn resolve(
        path: Option<&Path>,
        overrides: DisplayOverrides,
    ) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        let config = config.with_overrides(overrides);
        config.validate()?;
        Ok(config)
    }

    pub fn with_overrides(self, overrides: DisplayOverrides) -> Self {
        Self {
            fps: overrides.fps.unwrap_or(self.fps),
            spot_size: overrides.spot_size.unwrap_or(self.spot_size),
            margin_size: overrides.margin_size.unwrap_or(self.margin_size),
            graphics: overrides.graphics.unwrap_or(self.graphics),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fps == 0 || self.fps > MAX_FPS {
            return Err(ConfigError::InvalidValue {
                field: "fps",
                reason: format!("{} is not between 1 and {}", self.fps, MAX_FPS),
            });
        }
        if self.spot_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "spot-size",
                reason: "must be positive".to_string(),
            });
        }
        Ok(())
    }
}
