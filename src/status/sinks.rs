//! Status sinks
//!
//! Destinations for [`StatusMessage`]s.

use super::StatusMessage;
use log::{info, warn};
use std::sync::{Arc, Mutex};

/// Receives status messages from the credential checker
pub trait StatusSink: Send + Sync {
    fn emit(&self, message: &StatusMessage);
}

/// Writes status messages to the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl StatusSink for LogSink {
    fn emit(&self, message: &StatusMessage) {
        if message.is_failure() {
            warn!("{}", message);
        } else {
            info!("{}", message);
        }
    }
}

/// Records status messages in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    messages: Mutex<Vec<StatusMessage>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every message emitted so far, oldest first
    pub fn messages(&self) -> Vec<StatusMessage> {
        self.messages
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl StatusSink for MemorySink {
    fn emit(&self, message: &StatusMessage) {
        self.messages
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(message.clone());
    }
}

impl<S: StatusSink + ?Sized> StatusSink for &S {
    fn emit(&self, message: &StatusMessage) {
        (**self).emit(message)
    }
}

impl<S: StatusSink + ?Sized> StatusSink for Arc<S> {
    fn emit(&self, message: &StatusMessage) {
        (**self).emit(message)
    }
}
