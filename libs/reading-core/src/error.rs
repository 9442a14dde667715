//! Error types for reading-core.

use thiserror::Error;

/// Result type alias using SessionError.
pub type Result<T> = std::result::Result<T, SessionError>;

/// Errors raised by navigation requests. Parsing itself never fails.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("card index {index} out of range for deck of {len} cards")]
    IndexOutOfRange { index: usize, len: usize },
}
