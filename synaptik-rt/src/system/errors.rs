//! System-level error types.

// Layer 1: Standard library
use std::time::Duration;

// Layer 2: Third-party
use thiserror::Error;

// Layer 3: Internal
use crate::util::ActorId;

/// System-level errors for actor runtime operations.
///
/// Only synchronous bookkeeping surfaces errors to callers; everything
/// asynchronous past the mailbox boundary is best-effort and logged.
#[derive(Error, Debug)]
pub enum SystemError {
    /// Handle was never registered, or its actor has already terminated
    /// and been removed.
    #[error("Actor not found: {0}")]
    ActorNotFound(ActorId),

    /// Actor is poisoned and refuses new messages.
    #[error("Actor is gone (poisoned): {0}")]
    ActorGone(ActorId),

    /// Actor mailbox is at capacity (try-send paths only).
    #[error("Actor mailbox full: {0}")]
    MailboxFull(ActorId),

    /// System is shutting down, cannot accept new operations.
    #[error("System shutdown in progress")]
    ShuttingDown,

    /// Configuration validation error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Actor limit exceeded.
    #[error("Actor limit exceeded: current {current}, max {max}")]
    ActorLimitExceeded { current: usize, max: usize },

    /// Shutdown timeout exceeded.
    #[error("Shutdown timeout exceeded after {0:?}")]
    ShutdownTimeout(Duration),
}

impl SystemError {
    /// Check if error is transient (can retry).
    pub fn is_transient(&self) -> bool {
        matches!(self, SystemError::MailboxFull(_))
    }

    /// Check if error is fatal (system must stop).
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            SystemError::ShuttingDown | SystemError::ShutdownTimeout(_)
        )
    }

    /// Check if the target of a send no longer exists.
    ///
    /// Maintenance sweeps treat these as no-ops: racing a concept's death
    /// is expected, not exceptional.
    pub fn is_gone(&self) -> bool {
        matches!(
            self,
            SystemError::ActorNotFound(_) | SystemError::ActorGone(_)
        )
    }
}
