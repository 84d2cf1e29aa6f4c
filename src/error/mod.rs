//! Error handling
//!
//! Defines error types for the credential checker.

pub mod handlers;
pub mod types;

pub use types::*;
