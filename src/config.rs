//! Application configuration loaded from `noughts.toml`.

use derive_getters::Getters;
use derive_more::{Display, Error};
use noughts_core::Mode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings for the `play` and `simulate` commands.
///
/// Every field is optional in the file; missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Mode the first game starts in.
    mode: Mode,

    /// Cosmetic pause before the AI replies, in milliseconds.
    ai_delay_ms: u64,

    /// Seed for the AI's tie-breaks. OS entropy when absent.
    seed: Option<u64>,

    /// Where the terminal UI writes its log.
    log_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            ai_delay_ms: 500,
            seed: None,
            log_file: PathBuf::from("noughts.log"),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(mode = %config.mode, ai_delay_ms = config.ai_delay_ms, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line values on top of the file values.
    pub fn with_overrides(
        mut self,
        mode: Option<Mode>,
        ai_delay_ms: Option<u64>,
        seed: Option<u64>,
    ) -> Self {
        if let Some(mode) = mode {
            self.mode = mode;
        }
        if let Some(delay) = ai_delay_ms {
            self.ai_delay_ms = delay;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
