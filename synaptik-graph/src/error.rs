//! Graph-level error types.

// Layer 1: Standard library
// (none)

// Layer 2: Third-party
use thiserror::Error;

// Layer 3: Internal
use synaptik_rt::SystemError;

/// Errors surfaced by the knowledge graph facade.
///
/// Only synchronous bookkeeping reports errors; sends to unknown or dead
/// concepts are deliberately no-ops and never reach this type.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Underlying actor runtime refused an operation.
    #[error("Runtime error: {0}")]
    Runtime(#[from] SystemError),

    /// Invalid engine configuration at init time.
    #[error("Configuration error: {0}")]
    Config(String),
}
