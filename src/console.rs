//! Console front-end
//!
//! Reads commands line by line, runs them against a [`CredentialChecker`] and
//! writes one reply line per command. Ends on `QUIT` or end of input.

use crate::checker::CredentialChecker;
use crate::error::CheckerError;
use crate::protocol::{Command, Reply, parse_command};
use crate::status::StatusSink;
use log::{debug, info, warn};
use std::io;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt, AsyncWrite, AsyncWriteExt};

/// Outcome of dispatching one command
#[derive(Debug, PartialEq, Eq)]
pub enum CommandStatus {
    Continue(Reply),
    Close(Reply),
}

/// Dispatches a parsed command to the checker.
pub fn handle_command<S: StatusSink>(
    checker: &CredentialChecker<S>,
    command: &Command,
) -> CommandStatus {
    match command {
        Command::Login { username, password } => {
            debug!("LOGIN requested for '{}'", username);
            if checker.login(username, password) {
                CommandStatus::Continue(Reply::LoginSuccessful)
            } else {
                CommandStatus::Continue(Reply::LoginFailed)
            }
        }
        Command::Logout => {
            checker.logout();
            CommandStatus::Continue(Reply::LogoutSuccessful)
        }
        Command::Quit => CommandStatus::Close(Reply::Goodbye),
        Command::Unknown(raw) => {
            debug!("Unknown command: {}", raw);
            CommandStatus::Continue(Reply::UnknownCommand)
        }
    }
}

/// One line read from the console
#[derive(Debug, PartialEq, Eq)]
enum InputLine {
    Command(String),
    TooLong,
}

/// Reads one line of at most `max_len` bytes, excluding the line ending.
///
/// Longer lines are discarded up to the next newline without being buffered.
async fn read_line<R>(reader: &mut R, max_len: usize) -> io::Result<Option<InputLine>>
where
    R: AsyncBufRead + Unpin,
{
    let mut buf = Vec::new();
    // Room for the content plus CRLF
    let limit = max_len.saturating_add(2);
    let read = (&mut *reader)
        .take(limit as u64)
        .read_until(b'\n', &mut buf)
        .await?;
    if read == 0 {
        return Ok(None);
    }

    let complete = buf.ends_with(b"\n");
    if !complete && buf.len() >= limit {
        discard_line(reader).await?;
        return Ok(Some(InputLine::TooLong));
    }

    if buf.ends_with(b"\n") {
        buf.pop();
    }
    if buf.ends_with(b"\r") {
        buf.pop();
    }
    if buf.len() > max_len {
        return Ok(Some(InputLine::TooLong));
    }

    Ok(Some(InputLine::Command(
        String::from_utf8_lossy(&buf).into_owned(),
    )))
}

/// Skips input up to and including the next newline
async fn discard_line<R>(reader: &mut R) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    loop {
        let (used, done) = {
            let chunk = reader.fill_buf().await?;
            match chunk.iter().position(|b| *b == b'\n') {
                Some(pos) => (pos + 1, true),
                None => (chunk.len(), chunk.is_empty()),
            }
        };
        reader.consume(used);
        if done {
            return Ok(());
        }
    }
}

/// Runs the console loop until `QUIT` or end of input.
///
/// Lines longer than `max_command_length` bytes are rejected without being
/// parsed.
pub async fn run<R, W, S>(
    mut reader: R,
    mut writer: W,
    checker: &CredentialChecker<S>,
    max_command_length: usize,
) -> Result<(), CheckerError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    S: StatusSink,
{
    while let Some(line) = read_line(&mut reader, max_command_length).await? {
        let status = match line {
            InputLine::Command(line) => handle_command(checker, &parse_command(&line)),
            InputLine::TooLong => {
                warn!(
                    "Rejected console line longer than {} bytes",
                    max_command_length
                );
                CommandStatus::Continue(Reply::CommandTooLong)
            }
        };

        match status {
            CommandStatus::Continue(reply) => {
                writer.write_all(reply.line().as_bytes()).await?;
                writer.flush().await?;
            }
            CommandStatus::Close(reply) => {
                writer.write_all(reply.line().as_bytes()).await?;
                writer.flush().await?;
                info!("Console closed by QUIT");
                return Ok(());
            }
        }
    }

    info!("Console input ended");
    Ok(())
}
