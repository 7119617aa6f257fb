//! Custom test assertions
//!
//! Assertion helpers for the domain error taxonomy that give more useful
//! failure messages than a bare `matches!`.

use core_kernel::TradeError;

/// Asserts that a result failed with a validation error
pub fn assert_validation<T: std::fmt::Debug>(result: Result<T, TradeError>) {
    match result {
        Err(TradeError::Validation(_)) => {}
        other => panic!("expected validation error, got {other:?}"),
    }
}

/// Asserts that a result failed with a forbidden error
pub fn assert_forbidden<T: std::fmt::Debug>(result: Result<T, TradeError>) {
    match result {
        Err(TradeError::Forbidden(_)) => {}
        other => panic!("expected forbidden error, got {other:?}"),
    }
}

/// Asserts that a result failed with a not-found error
pub fn assert_not_found<T: std::fmt::Debug>(result: Result<T, TradeError>) {
    match result {
        Err(TradeError::NotFound { .. }) => {}
        other => panic!("expected not-found error, got {other:?}"),
    }
}

/// Asserts that a result failed with an invalid-state error reporting the
/// given current status
pub fn assert_invalid_state<T: std::fmt::Debug>(result: Result<T, TradeError>, expected: &str) {
    match result {
        Err(TradeError::InvalidState { current, .. }) => {
            assert_eq!(
                current, expected,
                "invalid-state error reported the wrong current status"
            );
        }
        other => panic!("expected invalid-state error, got {other:?}"),
    }
}

/// Asserts that a result failed with a conflict error
pub fn assert_conflict<T: std::fmt::Debug>(result: Result<T, TradeError>) {
    match result {
        Err(TradeError::Conflict(_)) => {}
        other => panic!("expected conflict error, got {other:?}"),
    }
}
