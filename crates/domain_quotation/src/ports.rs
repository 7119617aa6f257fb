//! Quotation domain ports

use async_trait::async_trait;

use core_kernel::{DomainPort, DpqId, PartyId, PortError, RfqId};

use crate::quotation::{DpqStatus, Quotation};

/// Port for quotation storage
///
/// `update` is a versioned check-then-write; a version mismatch fails with
/// `PortError::Conflict` without writing.
#[async_trait]
pub trait QuotationStore: DomainPort {
    /// Retrieves a quotation by id
    async fn get(&self, id: DpqId) -> Result<Quotation, PortError>;

    /// Inserts a new quotation
    async fn insert(&self, quotation: Quotation) -> Result<(), PortError>;

    /// Replaces a quotation, guarded by the version precondition
    async fn update(
        &self,
        expected_version: u32,
        quotation: Quotation,
    ) -> Result<Quotation, PortError>;

    /// Finds the quotation derived from an RFQ, if one exists.
    /// An RFQ has at most one quotation, live or terminal.
    async fn find_by_rfq(&self, rfq_id: RfqId) -> Result<Option<Quotation>, PortError>;

    /// Lists quotations by status
    async fn list_by_status(&self, status: DpqStatus) -> Result<Vec<Quotation>, PortError>;

    /// Lists a buyer's quotations
    async fn list_by_buyer(&self, buyer_id: PartyId) -> Result<Vec<Quotation>, PortError>;
}
