//! Order lifecycle manager

use std::sync::Arc;

use tracing::info;

use core_kernel::{DocumentRef, DpoId, DpqId, FreezeGuard, PartyId, TradeError};
use domain_access::{ensure_allowed, ActingUser, TransitionKind};
use domain_quotation::QuotationStore;

use crate::order::{Order, OrderStatus};
use crate::ports::OrderStore;

/// Service owning the order state machine
pub struct OrderService {
    quotations: Arc<dyn QuotationStore>,
    orders: Arc<dyn OrderStore>,
    freeze: Arc<dyn FreezeGuard>,
}

impl OrderService {
    pub fn new(
        quotations: Arc<dyn QuotationStore>,
        orders: Arc<dyn OrderStore>,
        freeze: Arc<dyn FreezeGuard>,
    ) -> Self {
        Self {
            quotations,
            orders,
            freeze,
        }
    }

    /// Converts an accepted quotation into a pending order. Gatekeeper-only.
    ///
    /// The quotation is claimed first through a versioned `converted` write,
    /// so of two racing conversions exactly one inserts an order and the
    /// other fails with a conflict.
    pub async fn convert_to_dpo(
        &self,
        acting: ActingUser,
        dpq_id: DpqId,
    ) -> Result<Order, TradeError> {
        ensure_allowed(acting.role, TransitionKind::ConvertQuotation)?;

        if self
            .freeze
            .is_frozen(DocumentRef::Quotation(dpq_id))
            .await?
        {
            return Err(TradeError::conflict(
                "quotation is frozen by an open dispute",
            ));
        }

        let mut quotation = self
            .quotations
            .get(dpq_id)
            .await
            .map_err(|_| TradeError::not_found("quotation", dpq_id))?;

        if let Some(existing) = self.orders.find_by_quotation(dpq_id).await? {
            return Err(TradeError::conflict(format!(
                "quotation already converted into order {}",
                existing.id
            )));
        }

        let expected = quotation.version;
        quotation.mark_converted()?;
        let quotation = self.quotations.update(expected, quotation).await?;

        let order = Order::from_quotation(&quotation);
        self.orders.insert(order.clone()).await?;

        info!(
            quotation = %dpq_id,
            order = %order.id,
            total = %order.total_value,
            "quotation converted into order"
        );
        Ok(order)
    }

    /// Confirms a pending order. Gatekeeper-only.
    pub async fn confirm(&self, acting: ActingUser, id: DpoId) -> Result<Order, TradeError> {
        self.advance(acting, id, TransitionKind::ConfirmOrder, Order::confirm)
            .await
    }

    /// Moves a confirmed order into processing. Gatekeeper-only.
    pub async fn start_processing(
        &self,
        acting: ActingUser,
        id: DpoId,
    ) -> Result<Order, TradeError> {
        self.advance(
            acting,
            id,
            TransitionKind::ProcessOrder,
            Order::start_processing,
        )
        .await
    }

    /// Completes a processing order. Gatekeeper-only.
    pub async fn complete(&self, acting: ActingUser, id: DpoId) -> Result<Order, TradeError> {
        self.advance(acting, id, TransitionKind::CompleteOrder, Order::complete)
            .await
    }

    /// Retrieves an order
    pub async fn get(&self, id: DpoId) -> Result<Order, TradeError> {
        self.load(id).await
    }

    /// Lists orders by status
    pub async fn list_by_status(&self, status: OrderStatus) -> Result<Vec<Order>, TradeError> {
        Ok(self.orders.list_by_status(status).await?)
    }

    /// Lists a buyer's orders
    pub async fn list_by_buyer(&self, buyer_id: PartyId) -> Result<Vec<Order>, TradeError> {
        Ok(self.orders.list_by_buyer(buyer_id).await?)
    }

    async fn advance(
        &self,
        acting: ActingUser,
        id: DpoId,
        transition: TransitionKind,
        apply: fn(&mut Order) -> Result<(), TradeError>,
    ) -> Result<Order, TradeError> {
        ensure_allowed(acting.role, transition)?;

        if self.freeze.is_frozen(DocumentRef::Order(id)).await? {
            return Err(TradeError::conflict("order is frozen by an open dispute"));
        }

        let mut order = self.load(id).await?;
        let expected = order.version;
        apply(&mut order)?;

        let stored = self.orders.update(expected, order).await?;
        info!(order = %id, status = %stored.status, "order advanced");
        Ok(stored)
    }

    async fn load(&self, id: DpoId) -> Result<Order, TradeError> {
        self.orders
            .get(id)
            .await
            .map_err(|_| TradeError::not_found("order", id))
    }
}
