//! Interpreter error types.
//!
//! Interpretation itself never fails; these cover configuration and the
//! candidate source at the crate's edges.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InterpreterError {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("invalid budget pattern: {0}")]
    Pattern(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("source not found: {0}")]
    NotFound(String),

    #[error("decode error: {0}")]
    Decode(String),
}

/// Convenience alias for interpreter results.
pub type InterpreterResult<T> = Result<T, InterpreterError>;
