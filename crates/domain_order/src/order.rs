//! Purchase order aggregate

use chrono::{DateTime, NaiveDate, Utc};
use core_kernel::{DpoId, DpqId, Money, PartyId, ProductId, RfqId, TradeError};
use domain_quotation::Quotation;
use serde::{Deserialize, Serialize};

/// Order lifecycle status. The progression is strictly linear and there
/// are no reverse edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Processing,
    Completed,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Processing => "processing",
            Self::Completed => "completed",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A purchase order derived from an accepted quotation.
///
/// Commercial terms are snapshotted at conversion time; later edits to the
/// quotation (there are none, it is terminal) can never reach the order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: DpoId,
    /// Source quotation
    pub dpq_id: DpqId,
    /// Originating RFQ, carried for workflow traversal
    pub rfq_id: RfqId,
    pub product_id: ProductId,
    pub buyer_id: PartyId,
    pub quantity: u32,
    pub unit_price: Money,
    /// unit_price x quantity, frozen at conversion
    pub total_value: Money,
    pub delivery_port: Option<String>,
    pub delivery_date: Option<NaiveDate>,
    pub payment_terms: String,
    pub status: OrderStatus,
    /// Version for optimistic concurrency
    pub version: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Snapshots an accepted quotation into a pending order.
    pub fn from_quotation(quotation: &Quotation) -> Self {
        let now = Utc::now();
        Self {
            id: DpoId::new_v7(),
            dpq_id: quotation.id,
            rfq_id: quotation.rfq_id,
            product_id: quotation.product_id,
            buyer_id: quotation.buyer_id,
            quantity: quotation.quantity,
            unit_price: quotation.unit_price,
            total_value: quotation.total_value(),
            delivery_port: quotation.delivery_port.clone(),
            delivery_date: quotation.delivery_date,
            payment_terms: quotation.payment_terms.clone(),
            status: OrderStatus::Pending,
            version: 1,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.status == OrderStatus::Completed
    }

    /// `pending` -> `confirmed`
    pub fn confirm(&mut self) -> Result<(), TradeError> {
        self.step("confirm order", OrderStatus::Pending, OrderStatus::Confirmed)
    }

    /// `confirmed` -> `processing`
    pub fn start_processing(&mut self) -> Result<(), TradeError> {
        self.step(
            "start processing",
            OrderStatus::Confirmed,
            OrderStatus::Processing,
        )
    }

    /// `processing` -> `completed`
    pub fn complete(&mut self) -> Result<(), TradeError> {
        self.step(
            "complete order",
            OrderStatus::Processing,
            OrderStatus::Completed,
        )
    }

    fn step(
        &mut self,
        action: &'static str,
        from: OrderStatus,
        to: OrderStatus,
    ) -> Result<(), TradeError> {
        if self.status != from {
            return Err(TradeError::invalid_state(action, self.status));
        }
        self.status = to;
        self.updated_at = Utc::now();
        Ok(())
    }
}
