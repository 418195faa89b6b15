//! Action invocation errors.

use thiserror::Error;

/// Boxed error produced by an action handler.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum ActionError {
    #[error("Action not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Input validation failed: {}", .0.join("; "))]
    ValidationFailed(Vec<String>),

    /// Failure raised by the handler itself. The message is surfaced verbatim.
    #[error(transparent)]
    Execution(BoxError),
}

impl ActionError {
    /// Wrap a handler failure without altering its message.
    pub fn execution(err: impl Into<BoxError>) -> Self {
        Self::Execution(err.into())
    }
}
