//! Credential checking
//!
//! Validation rules and the credential pair they apply to.

pub mod credentials;
pub mod validator;

pub use credentials::Credentials;
pub use validator::{Rules, ValidationRule, validate};
