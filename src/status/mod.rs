//! Status output
//!
//! Status messages emitted by login and logout, and the sinks they are
//! written to. The default sink goes through the `log` facade; tests swap in
//! a [`MemorySink`] to capture what was emitted.

pub mod sinks;

pub use sinks::{LogSink, MemorySink, StatusSink};

use std::fmt;

/// Human-readable status produced by a login or logout call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    LoginSucceeded { username: String },
    LoginFailed { username: String },
    LoggedOut,
}

impl StatusMessage {
    /// Whether this message reports a failure
    pub fn is_failure(&self) -> bool {
        matches!(self, StatusMessage::LoginFailed { .. })
    }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusMessage::LoginSucceeded { username } => {
                write!(f, "User '{}' logged in successfully", username)
            }
            StatusMessage::LoginFailed { username } => {
                write!(f, "Login failed for user '{}'", username)
            }
            StatusMessage::LoggedOut => write!(f, "User logged out"),
        }
    }
}
