//! Tests for tracing subscriber installation.
//!
//! The global subscriber can only be set once per process, so the install
//! sequence lives in a single test.

use colloquy_core::{ColloquyConfig, init_tracing, init_tracing_from_config};
use colloquy_error::ColloquyErrorKind;

#[test]
fn test_init_tracing_lifecycle() {
    let err = init_tracing("colloquy_core=bogus").unwrap_err();
    assert!(matches!(err.kind(), ColloquyErrorKind::Config(_)));
    assert!(err.to_string().contains("Invalid log filter"));

    let result = init_tracing_from_config(&ColloquyConfig::default());
    assert!(
        result.is_ok(),
        "First initialization should succeed: {:?}",
        result.err()
    );

    let err = init_tracing("info").unwrap_err();
    assert!(err.to_string().contains("Failed to install tracing subscriber"));
}
