//! Error types
//!
//! Defines the rule failures reported by the credential checker and the
//! errors raised by configuration loading and the console front-end.

use std::fmt;
use std::io;

/// Validation rule failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    EmptyUsername,
    PasswordTooShort { min: usize, actual: usize },
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::EmptyUsername => write!(f, "Username must not be empty"),
            AuthError::PasswordTooShort { min, actual } => write!(
                f,
                "Password too short: {} characters, need at least {}",
                actual, min
            ),
        }
    }
}

impl std::error::Error for AuthError {}

/// Top-level error for the crate's fallible surfaces
#[derive(Debug)]
pub enum CheckerError {
    Config(config::ConfigError),
    Io(io::Error),
}

impl fmt::Display for CheckerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckerError::Config(e) => write!(f, "Configuration error: {}", e),
            CheckerError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for CheckerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CheckerError::Config(e) => Some(e),
            CheckerError::Io(e) => Some(e),
        }
    }
}

impl From<config::ConfigError> for CheckerError {
    fn from(error: config::ConfigError) -> Self {
        CheckerError::Config(error)
    }
}

impl From<io::Error> for CheckerError {
    fn from(error: io::Error) -> Self {
        CheckerError::Io(error)
    }
}
