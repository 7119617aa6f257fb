//! RFQ domain ports

use async_trait::async_trait;

use core_kernel::{DomainPort, PartyId, PortError, RfqId};

use crate::rfq::{Rfq, RfqStatus};

/// Port for RFQ storage
///
/// `update` is a versioned check-then-write: a mismatch between
/// `expected_version` and the stored record fails with `PortError::Conflict`
/// without writing, and the caller re-reads and retries.
#[async_trait]
pub trait RfqStore: DomainPort {
    /// Retrieves an RFQ by id
    async fn get(&self, id: RfqId) -> Result<Rfq, PortError>;

    /// Inserts a new RFQ
    async fn insert(&self, rfq: Rfq) -> Result<(), PortError>;

    /// Replaces an RFQ, guarded by the version precondition
    async fn update(&self, expected_version: u32, rfq: Rfq) -> Result<Rfq, PortError>;

    /// Lists RFQs by status
    async fn list_by_status(&self, status: RfqStatus) -> Result<Vec<Rfq>, PortError>;

    /// Lists a buyer's RFQs
    async fn list_by_buyer(&self, buyer_id: PartyId) -> Result<Vec<Rfq>, PortError>;
}
