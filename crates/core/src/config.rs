//! Configuration parsing
//!
//! Pure parsing of the TOML configuration file. Reading the file and picking
//! its location is left to the shell.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const DEFAULT_LOGIN_PATH: &str = "/login";

/// Error type for configuration parsing
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("page_size must be at least 1")]
    ZeroPageSize,
    #[error("login_path must not be empty")]
    EmptyLoginPath,
}

/// Application configuration
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Users shown per page in listings.
    pub page_size: usize,
    /// Where the login modal sends the user on confirmation.
    pub login_path: String,
    /// Users fixture used when no file is passed on the command line.
    pub users_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            login_path: DEFAULT_LOGIN_PATH.to_string(),
            users_file: None,
        }
    }
}

impl Config {
    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        if self.login_path.is_empty() {
            return Err(ConfigError::EmptyLoginPath);
        }
        Ok(())
    }
}
