//! Configuration management for login-check
//!
//! Loads the checker rules from an optional `config.toml` with environment
//! overrides. Missing files fall back to the built-in defaults.

use crate::auth::Rules;
use config::{Config, Environment, File};
use serde::Deserialize;

/// Default minimum password length in characters
pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 6;

/// Default maximum console command length in bytes
pub const DEFAULT_MAX_COMMAND_LENGTH: usize = 1024;

/// Locations searched for `config.toml`, in order
const CONFIG_PATHS: [&str; 2] = [
    "login-check/config", // Packaged layout: ./login-check/config.toml
    "config",             // Local development: ./config.toml
];

/// Checker configuration
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct CheckerConfig {
    /// Minimum password length in characters
    /// Environment: LOGIN_CHECK_MIN_PASSWORD_LENGTH
    pub min_password_length: usize,

    /// Longest console line accepted, in bytes, excluding the line ending
    /// Environment: LOGIN_CHECK_MAX_COMMAND_LENGTH
    pub max_command_length: usize,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
            max_command_length: DEFAULT_MAX_COMMAND_LENGTH,
        }
    }
}

impl CheckerConfig {
    /// Load configuration from the standard locations with environment overrides
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(&CONFIG_PATHS)
    }

    /// Load configuration from the given file stems (without extension).
    ///
    /// Every file is optional; later sources override earlier ones and the
    /// environment overrides all files.
    pub fn load_from(paths: &[&str]) -> Result<Self, config::ConfigError> {
        let defaults = Self::default();
        let mut builder = Config::builder()
            .set_default("min_password_length", defaults.min_password_length as i64)?
            .set_default("max_command_length", defaults.max_command_length as i64)?;

        // Later entries win, so walk the list backwards to keep the first path authoritative
        for path in paths.iter().rev() {
            builder = builder.add_source(File::with_name(path).required(false));
        }

        let settings = builder
            .add_source(Environment::with_prefix("LOGIN_CHECK").try_parsing(true))
            .build()?;

        let config: CheckerConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.min_password_length == 0 {
            return Err(config::ConfigError::Message(
                "min_password_length must be greater than 0".into(),
            ));
        }

        if self.max_command_length == 0 {
            return Err(config::ConfigError::Message(
                "max_command_length must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Get the validation rules described by this configuration
    pub fn rules(&self) -> Rules {
        Rules {
            min_password_length: self.min_password_length,
        }
    }
}
