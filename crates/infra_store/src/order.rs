//! In-memory order store

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use core_kernel::{DomainPort, DpoId, DpqId, PartyId, PortError};
use domain_order::{Order, OrderStatus, OrderStore};

/// In-memory implementation of [`OrderStore`]
#[derive(Debug, Default)]
pub struct InMemoryOrderStore {
    orders: Arc<RwLock<HashMap<DpoId, Order>>>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DomainPort for InMemoryOrderStore {}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn get(&self, id: DpoId) -> Result<Order, PortError> {
        self.orders
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| PortError::not_found("Order", id))
    }

    async fn insert(&self, order: Order) -> Result<(), PortError> {
        let mut orders = self.orders.write().await;
        if orders.contains_key(&order.id) {
            return Err(PortError::conflict(format!(
                "order {} already exists",
                order.id
            )));
        }
        if orders.values().any(|existing| existing.dpq_id == order.dpq_id) {
            return Err(PortError::conflict(format!(
                "quotation {} already has an order",
                order.dpq_id
            )));
        }
        orders.insert(order.id, order);
        Ok(())
    }

    async fn update(&self, expected_version: u32, mut order: Order) -> Result<Order, PortError> {
        let mut orders = self.orders.write().await;
        let current = orders
            .get(&order.id)
            .ok_or_else(|| PortError::not_found("Order", order.id))?;
        if current.version != expected_version {
            return Err(PortError::conflict(format!(
                "version mismatch on order {}: expected {}, found {}",
                order.id, expected_version, current.version
            )));
        }
        order.version = expected_version + 1;
        orders.insert(order.id, order.clone());
        Ok(order)
    }

    async fn find_by_quotation(&self, dpq_id: DpqId) -> Result<Option<Order>, PortError> {
        Ok(self
            .orders
            .read()
            .await
            .values()
            .find(|order| order.dpq_id == dpq_id)
            .cloned())
    }

    async fn list_by_status(&self, status: OrderStatus) -> Result<Vec<Order>, PortError> {
        Ok(self
            .orders
            .read()
            .await
            .values()
            .filter(|order| order.status == status)
            .cloned()
            .collect())
    }

    async fn list_by_buyer(&self, buyer_id: PartyId) -> Result<Vec<Order>, PortError> {
        Ok(self
            .orders
            .read()
            .await
            .values()
            .filter(|order| order.buyer_id == buyer_id)
            .cloned()
            .collect())
    }
}
