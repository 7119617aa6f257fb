//! Product entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{Money, PartyId, ProductId, TradeError};

/// Product approval status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductStatus {
    /// Submitted by the seller, awaiting gatekeeper review
    Submitted,
    /// Approved for the marketplace
    Approved,
    /// Rejected by the gatekeeper
    Rejected,
    /// Offer validity elapsed
    Expired,
}

impl std::fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ProductStatus::Submitted => "submitted",
            ProductStatus::Approved => "approved",
            ProductStatus::Rejected => "rejected",
            ProductStatus::Expired => "expired",
        };
        write!(f, "{s}")
    }
}

/// Price basis for the offer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Incoterm {
    ExWorks,
    FreeOnBoard,
    CostAndFreight,
    CostInsuranceFreight,
    DeliveredDutyPaid,
}

/// A seller's offered line item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier
    pub id: ProductId,
    /// Product name
    pub name: String,
    /// Category label
    pub category: String,
    /// Unit price with currency
    pub unit_price: Money,
    /// Minimum order quantity
    pub min_order_quantity: u32,
    /// Quantity available for sale
    pub available_quantity: u32,
    /// Price basis
    pub incoterm: Incoterm,
    /// Whether the buyer may relabel the goods
    pub relabeling_allowed: bool,
    /// Offer validity deadline
    pub offer_valid_until: DateTime<Utc>,
    /// Owning seller
    pub seller_id: PartyId,
    /// Approval status
    pub status: ProductStatus,
    /// Version for optimistic concurrency
    pub version: u32,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Approves a submitted product
    pub fn approve(&mut self) -> Result<(), TradeError> {
        match self.status {
            ProductStatus::Submitted => {
                self.status = ProductStatus::Approved;
                self.updated_at = Utc::now();
                Ok(())
            }
            current => Err(TradeError::invalid_state("approve product", current)),
        }
    }

    /// Rejects a submitted product
    pub fn reject(&mut self) -> Result<(), TradeError> {
        match self.status {
            ProductStatus::Submitted => {
                self.status = ProductStatus::Rejected;
                self.updated_at = Utc::now();
                Ok(())
            }
            current => Err(TradeError::invalid_state("reject product", current)),
        }
    }

    /// Returns true once the offer validity deadline has elapsed
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.offer_valid_until
    }

    /// The status as of `now`: expiry overrides a stale stored status
    pub fn effective_status(&self, now: DateTime<Utc>) -> ProductStatus {
        if self.status == ProductStatus::Rejected {
            ProductStatus::Rejected
        } else if self.is_expired(now) {
            ProductStatus::Expired
        } else {
            self.status
        }
    }

    /// Returns true if the product can be the target of a new RFQ
    pub fn is_orderable(&self, now: DateTime<Utc>) -> bool {
        self.effective_status(now) == ProductStatus::Approved
    }
}
