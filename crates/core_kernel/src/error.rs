//! The shared workflow error taxonomy
//!
//! Every mutating operation in the workflow engine either fully commits a
//! transition or reports one of these kinds with the prior state unchanged.

use thiserror::Error;

use crate::money::MoneyError;
use crate::ports::PortError;

/// Error type shared by all lifecycle managers
#[derive(Debug, Error)]
pub enum TradeError {
    /// Malformed or missing required input. Not retried; surfaced verbatim.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Role or ownership mismatch. Surfaced as an access denial.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// The identifier does not resolve to a record.
    #[error("Not found: {entity} {id}")]
    NotFound { entity: &'static str, id: String },

    /// The requested transition is not legal from the current status.
    /// Carries the current status so the caller can decide whether to
    /// re-fetch and retry.
    #[error("Invalid state: cannot {action} while status is {current}")]
    InvalidState {
        action: &'static str,
        current: String,
    },

    /// An optimistic-concurrency precondition failed, or a derived document
    /// already exists. The caller is expected to re-read and retry.
    #[error("Conflict: {0}")]
    Conflict(String),
}

impl TradeError {
    pub fn validation(message: impl Into<String>) -> Self {
        TradeError::Validation(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        TradeError::Forbidden(message.into())
    }

    pub fn not_found(entity: &'static str, id: impl std::fmt::Display) -> Self {
        TradeError::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    pub fn invalid_state(action: &'static str, current: impl std::fmt::Display) -> Self {
        TradeError::InvalidState {
            action,
            current: current.to_string(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        TradeError::Conflict(message.into())
    }

    /// Returns true if the caller should re-read and retry
    pub fn is_retryable(&self) -> bool {
        matches!(self, TradeError::Conflict(_))
    }
}

impl From<MoneyError> for TradeError {
    fn from(err: MoneyError) -> Self {
        TradeError::Validation(err.to_string())
    }
}

impl From<PortError> for TradeError {
    fn from(err: PortError) -> Self {
        match err {
            PortError::NotFound { entity_type, id } => TradeError::NotFound {
                entity: "record",
                id: format!("{entity_type} {id}"),
            },
            PortError::Conflict { message } => TradeError::Conflict(message),
            PortError::Validation { message } => TradeError::Validation(message),
            other => TradeError::Conflict(format!("storage failure: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_is_retryable() {
        assert!(TradeError::conflict("stale version").is_retryable());
        assert!(!TradeError::validation("quantity must be positive").is_retryable());
        assert!(!TradeError::invalid_state("reject", "rejected").is_retryable());
    }

    #[test]
    fn test_invalid_state_carries_current_status() {
        let err = TradeError::invalid_state("confirm", "completed");
        assert!(err.to_string().contains("completed"));
    }

    #[test]
    fn test_port_conflict_maps_to_conflict() {
        let err: TradeError = PortError::conflict("version precondition failed").into();
        assert!(matches!(err, TradeError::Conflict(_)));
    }
}
