//! Credential validator
//!
//! Applies the two fixed validation rules: the username must be non-empty and
//! the password must reach a minimum length. Nothing is compared against
//! stored credentials.

use super::credentials::Credentials;
use crate::config::DEFAULT_MIN_PASSWORD_LENGTH;
use crate::error::AuthError;

/// One of the fixed checks applied to a credential pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationRule {
    UsernameNotEmpty,
    PasswordMinLength,
}

impl AuthError {
    /// The rule that produced this failure
    pub fn rule(&self) -> ValidationRule {
        match self {
            AuthError::EmptyUsername => ValidationRule::UsernameNotEmpty,
            AuthError::PasswordTooShort { .. } => ValidationRule::PasswordMinLength,
        }
    }
}

/// Parameters for the validation rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    /// Minimum password length, counted in characters
    pub min_password_length: usize,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
        }
    }
}

impl Rules {
    /// Checks a credential pair, reporting the first rule that fails.
    ///
    /// The username rule is checked before the password rule.
    pub fn check(&self, credentials: &Credentials<'_>) -> Result<(), AuthError> {
        if credentials.username.is_empty() {
            return Err(AuthError::EmptyUsername);
        }

        let length = credentials.password.chars().count();
        if length < self.min_password_length {
            return Err(AuthError::PasswordTooShort {
                min: self.min_password_length,
                actual: length,
            });
        }

        Ok(())
    }

    /// Returns true iff every rule passes
    pub fn validate(&self, username: &str, password: &str) -> bool {
        self.check(&Credentials::new(username, password)).is_ok()
    }
}

/// Validates a credential pair against the default rules.
///
/// True iff the username is non-empty and the password has at least six
/// characters.
pub fn validate(username: &str, password: &str) -> bool {
    Rules::default().validate(username, password)
}
