//! Ports and Adapters Infrastructure
//!
//! Each domain defines its own port trait for the data it needs; adapters
//! implement these traits to provide internal (in-memory, database) or
//! external (API) implementations. This module holds the pieces every port
//! shares: the unified [`PortError`], the [`DomainPort`] marker, and the
//! [`FreezeGuard`] seam consulted by every lifecycle manager before a
//! mutating transition.

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::identifiers::{DpoId, DpqId, RfqId};

/// Error type for port operations
///
/// Provides a unified error type that all port implementations must use,
/// ensuring consistent error handling across adapters.
#[derive(Debug, Error)]
pub enum PortError {
    /// The requested entity was not found
    #[error("Not found: {entity_type} with id {id}")]
    NotFound { entity_type: String, id: String },

    /// A validation error occurred
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// A write precondition failed or the operation conflicts with
    /// existing data
    #[error("Conflict: {message}")]
    Conflict { message: String },

    /// Connection to the underlying system failed
    #[error("Connection error: {message}")]
    Connection { message: String },

    /// The external system is unavailable
    #[error("Service unavailable: {service}")]
    ServiceUnavailable { service: String },

    /// An internal error occurred
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl PortError {
    /// Creates a NotFound error
    pub fn not_found(entity_type: impl Into<String>, id: impl fmt::Display) -> Self {
        PortError::NotFound {
            entity_type: entity_type.into(),
            id: id.to_string(),
        }
    }

    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        PortError::Validation {
            message: message.into(),
        }
    }

    /// Creates a Conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        PortError::Conflict {
            message: message.into(),
        }
    }

    /// Creates a ServiceUnavailable error
    pub fn unavailable(service: impl Into<String>) -> Self {
        PortError::ServiceUnavailable {
            service: service.into(),
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        PortError::Internal {
            message: message.into(),
        }
    }

    /// Returns true if this error indicates a transient failure that may
    /// succeed on retry
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            PortError::Connection { .. } | PortError::ServiceUnavailable { .. }
        )
    }

    /// Returns true if this error indicates the entity was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, PortError::NotFound { .. })
    }
}

/// Marker trait for all domain ports
///
/// All port traits should extend this marker to ensure they are
/// thread-safe and can be used in async contexts.
pub trait DomainPort: Send + Sync + 'static {}

/// A reference to a trade document anywhere in the RFQ -> DPQ -> DPO chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum DocumentRef {
    Rfq(RfqId),
    Quotation(DpqId),
    Order(DpoId),
}

impl fmt::Display for DocumentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentRef::Rfq(id) => write!(f, "{id}"),
            DocumentRef::Quotation(id) => write!(f, "{id}"),
            DocumentRef::Order(id) => write!(f, "{id}"),
        }
    }
}

/// Seam consulted by every lifecycle manager before mutating a document.
///
/// A frozen document (one referenced by an open dispute) admits no further
/// transitions until the dispute is resolved.
#[async_trait]
pub trait FreezeGuard: Send + Sync {
    /// Returns true if the document is currently frozen
    async fn is_frozen(&self, doc: DocumentRef) -> Result<bool, PortError>;
}

/// Null guard: nothing is ever frozen. Useful for tests and deployments
/// without the arbitration surface.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFreeze;

#[async_trait]
impl FreezeGuard for NoFreeze {
    async fn is_frozen(&self, _doc: DocumentRef) -> Result<bool, PortError> {
        Ok(false)
    }
}
