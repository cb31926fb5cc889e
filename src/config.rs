//! Runtime configuration loaded from `grid_invaders.toml`.
//!
//! Only the grid size, the wall-clock tick interval and logging can be
//! tuned.  Every field defaults to its constant in [`crate::constants`], so
//! a file only needs the keys it overrides, and no file at all means a
//! stock 40×20 game at 10 ticks per second.
//!
//! ```toml
//! width = 60
//! tick_interval_ms = 80
//! log_file = "grid_invaders.log"
//! ```

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::constants::{
    GRID_HEIGHT, GRID_WIDTH, MIN_GRID_HEIGHT, MIN_GRID_WIDTH, TICK_INTERVAL_MS,
};
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub width: u16,
    pub height: u16,
    /// Wall-clock sleep between ticks.  Simulated time always advances by
    /// `TIME_STEP` per tick regardless.
    pub tick_interval_ms: u64,
    /// When set, `tracing` output is appended to this file.
    pub log_file: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
            tick_interval_ms: TICK_INTERVAL_MS,
            log_file: None,
        }
    }
}

impl GameConfig {
    /// Read `path`, falling back to defaults when the file does not exist.
    /// A file that exists but cannot be read or parsed is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::from_toml_str(&contents),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width < MIN_GRID_WIDTH {
            return Err(ConfigError::Invalid {
                field: "width",
                reason: format!("must be at least {MIN_GRID_WIDTH}, got {}", self.width),
            });
        }
        if self.height < MIN_GRID_HEIGHT {
            return Err(ConfigError::Invalid {
                field: "height",
                reason: format!("must be at least {MIN_GRID_HEIGHT}, got {}", self.height),
            });
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "tick_interval_ms",
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}
