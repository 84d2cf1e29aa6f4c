//! Console protocol
//!
//! Line commands understood by the console front-end.

pub mod commands;
pub mod parser;

pub use commands::{Command, Reply};
pub use parser::parse_command;
