//! Storage port for orders

use async_trait::async_trait;
use core_kernel::{DomainPort, DpoId, DpqId, PartyId, PortError};

use crate::order::{Order, OrderStatus};

/// Order persistence port
#[async_trait]
pub trait OrderStore: DomainPort {
    /// Retrieves an order by id
    async fn get(&self, id: DpoId) -> Result<Order, PortError>;

    /// Persists a new order
    async fn insert(&self, order: Order) -> Result<(), PortError>;

    /// Versioned check-then-write; fails with `Conflict` on a stale version
    async fn update(&self, expected_version: u32, order: Order) -> Result<Order, PortError>;

    /// Finds the order derived from a quotation, if one exists
    async fn find_by_quotation(&self, dpq_id: DpqId) -> Result<Option<Order>, PortError>;

    /// Lists orders in the given status
    async fn list_by_status(&self, status: OrderStatus) -> Result<Vec<Order>, PortError>;

    /// Lists a buyer's orders
    async fn list_by_buyer(&self, buyer_id: PartyId) -> Result<Vec<Order>, PortError>;
}
