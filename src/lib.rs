//! login-check
//!
//! A credential checker: a username/password pair passes when the username
//! is non-empty and the password has at least six characters. `login` and
//! `logout` report their outcome to a pluggable status sink.

pub mod auth;
pub mod checker;
pub mod config;
pub mod console;
pub mod error;
pub mod protocol;
pub mod status;

pub use auth::validate;
pub use checker::{CredentialChecker, login, logout};
