//! Error types

use thiserror::Error;

/// Failure reported by an owner-supplied widget callback
///
/// Widgets never propagate these. They are logged and discarded after the
/// state update that triggered the callback has already been applied.
#[derive(Error, Debug)]
pub enum CallbackError {
    /// The callback refused the event
    #[error("callback rejected the event: {0}")]
    Rejected(String),

    /// Any other failure raised inside the callback
    #[error("callback failed: {0}")]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl CallbackError {
    pub fn rejected(reason: impl Into<String>) -> Self {
        CallbackError::Rejected(reason.into())
    }
}

/// Result type returned by fallible callbacks
pub type CallbackResult = std::result::Result<(), CallbackError>;
