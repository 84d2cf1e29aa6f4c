//! Credential checker
//!
//! Wraps the validation rules with status output: `login` reports success or
//! failure to a [`StatusSink`], `logout` always reports that the user left.
//! Every call is independent; nothing is remembered between calls.

use crate::auth::{Credentials, Rules};
use crate::config::CheckerConfig;
use crate::error::handlers::log_rule_failure;
use crate::status::{LogSink, StatusMessage, StatusSink};

/// Applies the validation rules and emits status messages to a sink
#[derive(Debug, Clone)]
pub struct CredentialChecker<S = LogSink> {
    rules: Rules,
    sink: S,
}

impl Default for CredentialChecker<LogSink> {
    fn default() -> Self {
        Self::new(LogSink)
    }
}

impl<S: StatusSink> CredentialChecker<S> {
    /// Checker with the default rules writing to `sink`
    pub fn new(sink: S) -> Self {
        Self::with_rules(Rules::default(), sink)
    }

    pub fn with_rules(rules: Rules, sink: S) -> Self {
        Self { rules, sink }
    }

    /// Checker with rules taken from a loaded configuration
    pub fn from_config(config: &CheckerConfig, sink: S) -> Self {
        Self::with_rules(config.rules(), sink)
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// True iff the credential pair passes every rule. No side effects.
    pub fn validate(&self, username: &str, password: &str) -> bool {
        self.rules.validate(username, password)
    }

    /// Validates the pair and emits a success or failure message.
    ///
    /// Returns exactly what [`validate`](Self::validate) returns.
    pub fn login(&self, username: &str, password: &str) -> bool {
        let message = match self.rules.check(&Credentials::new(username, password)) {
            Ok(()) => StatusMessage::LoginSucceeded {
                username: username.to_string(),
            },
            Err(e) => {
                log_rule_failure(username, &e);
                StatusMessage::LoginFailed {
                    username: username.to_string(),
                }
            }
        };

        let success = !message.is_failure();
        self.sink.emit(&message);
        success
    }

    /// Emits a logout message. There is no session to end.
    pub fn logout(&self) {
        self.sink.emit(&StatusMessage::LoggedOut);
    }
}

/// Validates and logs the outcome through the `log` facade
pub fn login(username: &str, password: &str) -> bool {
    CredentialChecker::default().login(username, password)
}

/// Logs a logout through the `log` facade
pub fn logout() {
    CredentialChecker::default().logout()
}
