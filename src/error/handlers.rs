//! Error handlers
//!
//! Routes errors to the log.

use crate::error::types::{AuthError, CheckerError};
use log::{debug, error};

/// Log a fatal crate error
pub fn handle_error(err: &CheckerError) {
    error!("login-check error: {}", err);
}

/// Log which rule rejected a credential pair.
///
/// The reason stays in the debug log only; callers see a plain `false`.
pub fn log_rule_failure(username: &str, err: &AuthError) {
    debug!(
        "Credentials for '{}' rejected by {:?}: {}",
        username,
        err.rule(),
        err
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::ValidationRule;

    #[test]
    fn test_rule_failure_names_rule() {
        let short = AuthError::PasswordTooShort { min: 6, actual: 2 };
        assert_eq!(short.rule(), ValidationRule::PasswordMinLength);
        log_rule_failure("alice", &short);
        log_rule_failure("", &AuthError::EmptyUsername);
    }
}

