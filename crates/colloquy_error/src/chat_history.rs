//! Transcript codec error types.

/// Ways decoding a chat history can fail.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ChatHistoryErrorKind {
    /// Input is not syntactically valid JSON
    #[display("Malformed JSON: {}", _0)]
    MalformedJson(String),
    /// Input is valid JSON but not shaped like a chat history
    #[display("Schema mismatch: {}", _0)]
    SchemaMismatch(String),
    /// An `author_role` value names no known role
    #[display("Unknown author role: {:?}", _0)]
    UnknownRoleName(String),
}

/// Chat history error with location tracking.
///
/// # Examples
///
/// ```
/// use colloquy_error::{ChatHistoryError, ChatHistoryErrorKind};
///
/// let err = ChatHistoryError::new(ChatHistoryErrorKind::MalformedJson(
///     "expected value at line 1 column 1".to_string(),
/// ));
/// assert!(format!("{}", err).contains("Malformed JSON"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Chat History Error: {} at line {} in {}", kind, line, file)]
pub struct ChatHistoryError {
    /// The kind of error that occurred
    pub kind: ChatHistoryErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ChatHistoryError {
    /// Create a new chat history error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ChatHistoryErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
