//! Error types for the Colloquy library.
//!
//! Every error records the source location where it was created, so a
//! failure surfaced from deep inside the codec still points at the line that
//! rejected the input.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod chat_history;
mod config;

pub use chat_history::{ChatHistoryError, ChatHistoryErrorKind};
pub use config::ConfigError;

/// Crate-level error variants.
#[derive(Debug, derive_more::From, derive_more::Display)]
pub enum ColloquyErrorKind {
    /// Transcript encode/decode error
    #[display("{}", _0)]
    ChatHistory(ChatHistoryError),
    /// Configuration error
    #[display("{}", _0)]
    Config(ConfigError),
}

/// Colloquy error with kind discrimination.
///
/// # Examples
///
/// ```
/// use colloquy_error::{ChatHistoryError, ChatHistoryErrorKind, ColloquyError};
///
/// let err: ColloquyError =
///     ChatHistoryError::new(ChatHistoryErrorKind::UnknownRoleName("Bogus".into())).into();
/// assert!(matches!(
///     err.chat_history_kind(),
///     Some(ChatHistoryErrorKind::UnknownRoleName(_))
/// ));
/// ```
#[derive(Debug)]
pub struct ColloquyError(Box<ColloquyErrorKind>);

impl ColloquyError {
    /// Create a new error from a kind.
    pub fn new(kind: ColloquyErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ColloquyErrorKind {
        &self.0
    }

    /// The transcript error kind, if this error came from the codec.
    pub fn chat_history_kind(&self) -> Option<&ChatHistoryErrorKind> {
        match self.kind() {
            ColloquyErrorKind::ChatHistory(e) => Some(&e.kind),
            _ => None,
        }
    }
}

impl std::fmt::Display for ColloquyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Colloquy Error: {}", self.0)
    }
}

impl std::error::Error for ColloquyError {}

// Generic From implementation for any type that converts to ColloquyErrorKind
impl<T> From<T> for ColloquyError
where
    T: Into<ColloquyErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Colloquy operations.
pub type ColloquyResult<T> = std::result::Result<T, ColloquyError>;
