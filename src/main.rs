//! login-check - Entry Point
//!
//! Reads LOGIN/LOGOUT/QUIT commands from stdin and answers on stdout.

use log::info;
use login_check::config::CheckerConfig;
use login_check::error::CheckerError;
use login_check::error::handlers::handle_error;
use login_check::status::LogSink;
use login_check::{CredentialChecker, console};
use tokio::io::{BufReader, stdin, stdout};

#[tokio::main]
async fn main() {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    if let Err(e) = run().await {
        handle_error(&e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CheckerError> {
    let config = CheckerConfig::load()?;
    info!(
        "Starting login-check (min password length: {})",
        config.min_password_length
    );

    let checker = CredentialChecker::from_config(&config, LogSink);
    console::run(
        BufReader::new(stdin()),
        stdout(),
        &checker,
        config.max_command_length,
    )
    .await
}
