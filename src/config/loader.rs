use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::args::{FlagKind, FlagRegistry, KnownFlag, HELP_FLAG};
use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the default configuration file.
    ///
    /// Uses `~/.config/flagnames/config.toml` on Unix,
    /// or the equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to the current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("flagnames").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - Otherwise behaves like [`Config::load_from`].
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();

        if !path.exists() {
            return Ok(Config::default());
        }

        Self::load_from(&path)
    }

    /// Loads configuration from an explicit path.
    ///
    /// Unlike [`Config::load`], a missing file is an error.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks that every flag name:
    /// - is not empty
    /// - does not start with a hyphen or contain `=`
    /// - is declared once
    ///
    /// `help` is built in as a switch and may only be redeclared as one.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();

        for flag in &self.flags {
            let name = flag.name.as_str();
            if name.is_empty() {
                return Err(ConfigError::ValidationError {
                    message: "Flag names must not be empty".to_string(),
                });
            }
            if name.starts_with('-') || name.contains('=') {
                return Err(ConfigError::ValidationError {
                    message: format!(
                        "Flag '{}' must be given without leading hyphens or '='",
                        name
                    ),
                });
            }
            if name == HELP_FLAG && flag.kind != FlagKind::Switch {
                return Err(ConfigError::ValidationError {
                    message: format!(
                        "Flag '{}' is built in as a switch; declare it with kind = \"switch\" or leave it out",
                        HELP_FLAG
                    ),
                });
            }
            if !seen.insert(name) {
                return Err(ConfigError::ValidationError {
                    message: format!("Flag '{}' is declared more than once", name),
                });
            }
        }

        Ok(())
    }

    /// Builds the flag registry from the declared flags.
    pub fn registry(&self) -> FlagRegistry {
        self.flags
            .iter()
            .map(|f| KnownFlag::new(f.name.clone(), f.kind))
            .collect()
    }
}
