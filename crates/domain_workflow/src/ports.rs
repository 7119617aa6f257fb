//! Storage and collaborator ports for the workflow domain

use async_trait::async_trait;
use core_kernel::{DisputeId, DocumentRef, DomainPort, DpoId, PortError};

use crate::dispute::Dispute;

/// Dispute persistence port
#[async_trait]
pub trait DisputeStore: DomainPort {
    /// Retrieves a dispute by id
    async fn get(&self, id: DisputeId) -> Result<Dispute, PortError>;

    /// Persists a new dispute
    async fn insert(&self, dispute: Dispute) -> Result<(), PortError>;

    /// Versioned check-then-write; fails with `Conflict` on a stale version
    async fn update(&self, expected_version: u32, dispute: Dispute) -> Result<Dispute, PortError>;

    /// Finds the open dispute on a document, if one exists
    async fn find_open_by_document(
        &self,
        document: DocumentRef,
    ) -> Result<Option<Dispute>, PortError>;

    /// Lists all open disputes
    async fn list_open(&self) -> Result<Vec<Dispute>, PortError>;
}

/// A fulfillment collaborator the tracker polls for an order's stage
/// status. Implementations wrap external parties (survey, transport,
/// logistics, payment) and may be unreachable at any time.
#[async_trait]
pub trait StatusProvider: DomainPort {
    /// Stage name as it appears in the workflow snapshot
    fn stage(&self) -> &'static str;

    /// Current status of this stage for the given order
    async fn status_for(&self, order_id: DpoId) -> Result<String, PortError>;
}
