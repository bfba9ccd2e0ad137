//! Errors raised by source adapters.

use thiserror::Error;

/// Failure of a single third-party source.
///
/// Never fatal: the hub converts each variant into that section's display
/// state and leaves the other sections alone.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// Network failure, non-success status or unusable payload.
    /// The message is short and safe to show inline.
    #[error("{0}")]
    Fetch(String),

    /// The handle could not be turned into a username; nothing was fetched.
    #[error("Invalid handle: {0}")]
    InvalidInput(String),
}

impl SourceError {
    pub fn fetch(message: impl Into<String>) -> Self {
        Self::Fetch(message.into())
    }

    pub fn invalid_input(handle: impl Into<String>) -> Self {
        Self::InvalidInput(handle.into())
    }
}
