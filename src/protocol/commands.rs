//! Console commands
//!
//! Commands accepted by the line-oriented console and the replies sent back.

/// A command parsed from one line of console input.
#[derive(Debug, PartialEq)]
pub enum Command {
    Login { username: String, password: String },
    Logout,
    Quit,
    Unknown(String),
}

/// Replies written back to the console, one per command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    LoginSuccessful,
    LoginFailed,
    LogoutSuccessful,
    Goodbye,
    UnknownCommand,
    CommandTooLong,
}

impl Reply {
    pub fn code(&self) -> u16 {
        match self {
            Reply::LoginSuccessful => 230,
            Reply::LoginFailed => 530,
            Reply::LogoutSuccessful | Reply::Goodbye => 221,
            Reply::UnknownCommand | Reply::CommandTooLong => 500,
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            Reply::LoginSuccessful => "Login successful",
            Reply::LoginFailed => "Login failed",
            Reply::LogoutSuccessful => "Logout successful",
            Reply::Goodbye => "Goodbye",
            Reply::UnknownCommand => "Unknown command",
            Reply::CommandTooLong => "Command too long",
        }
    }

    /// The full reply line, terminated with CRLF
    pub fn line(&self) -> String {
        format!("{} {}\r\n", self.code(), self.text())
    }
}
