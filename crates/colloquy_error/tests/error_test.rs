//! Tests for colloquy_error types.

use colloquy_error::{
    ChatHistoryError, ChatHistoryErrorKind, ColloquyError, ColloquyErrorKind, ColloquyResult,
    ConfigError,
};

#[test]
fn test_chat_history_error_tracks_location() {
    let err = ChatHistoryError::new(ChatHistoryErrorKind::SchemaMismatch(
        "missing field `content`".to_string(),
    ));
    assert!(err.file.ends_with("error_test.rs"));
    assert!(err.line > 0);
}

#[test]
fn test_chat_history_error_display() {
    let err = ChatHistoryError::new(ChatHistoryErrorKind::UnknownRoleName("Bogus".to_string()));
    let rendered = err.to_string();
    assert!(rendered.starts_with("Chat History Error: Unknown author role: \"Bogus\""));
    assert!(rendered.contains("error_test.rs"));
}

#[test]
fn test_config_error_display() {
    let err = ConfigError::new("Failed to parse config");
    assert!(err.to_string().starts_with("Configuration Error: Failed to parse config"));
}

#[test]
fn test_colloquy_error_from_chat_history_error() {
    let err: ColloquyError =
        ChatHistoryError::new(ChatHistoryErrorKind::MalformedJson("eof".into())).into();
    assert!(matches!(err.kind(), ColloquyErrorKind::ChatHistory(_)));
    assert_eq!(
        err.chat_history_kind(),
        Some(&ChatHistoryErrorKind::MalformedJson("eof".into()))
    );
    assert!(err.to_string().starts_with("Colloquy Error: Chat History Error:"));
}

#[test]
fn test_colloquy_error_from_config_error() {
    let err: ColloquyError = ConfigError::new("bad").into();
    assert!(matches!(err.kind(), ColloquyErrorKind::Config(_)));
    assert!(err.chat_history_kind().is_none());
}

#[test]
fn test_question_mark_conversion() {
    fn fails() -> ColloquyResult<()> {
        let parsed: Result<(), ConfigError> = Err(ConfigError::new("nope"));
        parsed?;
        Ok(())
    }

    let err = fails().unwrap_err();
    assert!(matches!(err.kind(), ColloquyErrorKind::Config(_)));
}
