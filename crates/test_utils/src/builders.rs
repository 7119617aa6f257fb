//! Test data builders
//!
//! Builder patterns for constructing marketplace entities with sensible
//! defaults. Tests set only the fields they care about.

use chrono::{NaiveDate, Utc};
use core_kernel::{DpqId, Money, PartyId, ProductId, RfqId};
use domain_catalog::{Incoterm, Product, ProductStatus};
use domain_quotation::{DpqStatus, Quotation};
use domain_rfq::{Rfq, RfqStatus};

use crate::fixtures::{MoneyFixtures, TemporalFixtures};

/// Builder for test products
pub struct ProductBuilder {
    name: String,
    category: String,
    unit_price: Money,
    min_order_quantity: u32,
    available_quantity: u32,
    seller_id: PartyId,
    status: ProductStatus,
}

impl Default for ProductBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductBuilder {
    pub fn new() -> Self {
        Self {
            name: "Basmati rice, grade A".to_string(),
            category: "agri".to_string(),
            unit_price: MoneyFixtures::usd_unit_price(),
            min_order_quantity: 10,
            available_quantity: 1000,
            seller_id: PartyId::new_v7(),
            status: ProductStatus::Approved,
        }
    }

    pub fn with_unit_price(mut self, price: Money) -> Self {
        self.unit_price = price;
        self
    }

    pub fn with_min_order_quantity(mut self, moq: u32) -> Self {
        self.min_order_quantity = moq;
        self
    }

    pub fn with_available_quantity(mut self, available: u32) -> Self {
        self.available_quantity = available;
        self
    }

    pub fn with_seller(mut self, seller_id: PartyId) -> Self {
        self.seller_id = seller_id;
        self
    }

    pub fn with_status(mut self, status: ProductStatus) -> Self {
        self.status = status;
        self
    }

    pub fn build(self) -> Product {
        let now = Utc::now();
        Product {
            id: ProductId::new_v7(),
            name: self.name,
            category: self.category,
            unit_price: self.unit_price,
            min_order_quantity: self.min_order_quantity,
            available_quantity: self.available_quantity,
            incoterm: Incoterm::FreeOnBoard,
            relabeling_allowed: false,
            offer_valid_until: TemporalFixtures::next_month(),
            seller_id: self.seller_id,
            status: self.status,
            version: 1,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Builder for test RFQs
pub struct RfqBuilder {
    product_id: ProductId,
    buyer_id: PartyId,
    quantity: u32,
    status: RfqStatus,
}

impl Default for RfqBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RfqBuilder {
    pub fn new() -> Self {
        Self {
            product_id: ProductId::new_v7(),
            buyer_id: PartyId::new_v7(),
            quantity: 50,
            status: RfqStatus::Open,
        }
    }

    pub fn with_product(mut self, product_id: ProductId) -> Self {
        self.product_id = product_id;
        self
    }

    pub fn with_buyer(mut self, buyer_id: PartyId) -> Self {
        self.buyer_id = buyer_id;
        self
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn with_status(mut self, status: RfqStatus) -> Self {
        self.status = status;
        self
    }

    pub fn build(self) -> Rfq {
        let now = Utc::now();
        Rfq {
            id: RfqId::new_v7(),
            product_id: self.product_id,
            buyer_id: self.buyer_id,
            quantity: self.quantity,
            budget_min: None,
            budget_max: None,
            response_deadline: None,
            description: None,
            status: self.status,
            responses: Vec::new(),
            version: 1,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Builder for test quotations
pub struct QuotationBuilder {
    rfq_id: RfqId,
    product_id: ProductId,
    buyer_id: PartyId,
    quantity: u32,
    unit_price: Money,
    status: DpqStatus,
}

impl Default for QuotationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl QuotationBuilder {
    pub fn new() -> Self {
        Self {
            rfq_id: RfqId::new_v7(),
            product_id: ProductId::new_v7(),
            buyer_id: PartyId::new_v7(),
            quantity: 50,
            unit_price: MoneyFixtures::usd_unit_price(),
            status: DpqStatus::Draft,
        }
    }

    pub fn with_rfq(mut self, rfq_id: RfqId) -> Self {
        self.rfq_id = rfq_id;
        self
    }

    pub fn with_buyer(mut self, buyer_id: PartyId) -> Self {
        self.buyer_id = buyer_id;
        self
    }

    pub fn with_unit_price(mut self, price: Money) -> Self {
        self.unit_price = price;
        self
    }

    pub fn with_status(mut self, status: DpqStatus) -> Self {
        self.status = status;
        self
    }

    /// Derives the builder's fields from an existing RFQ
    pub fn for_rfq(mut self, rfq: &Rfq) -> Self {
        self.rfq_id = rfq.id;
        self.product_id = rfq.product_id;
        self.buyer_id = rfq.buyer_id;
        self.quantity = rfq.quantity;
        self
    }

    pub fn build(self) -> Quotation {
        let now = Utc::now();
        Quotation {
            id: DpqId::new_v7(),
            rfq_id: self.rfq_id,
            product_id: self.product_id,
            buyer_id: self.buyer_id,
            quantity: self.quantity,
            unit_price: self.unit_price,
            delivery_port: Some("Nhava Sheva".to_string()),
            delivery_date: NaiveDate::from_ymd_opt(2026, 11, 15),
            payment_terms: "30% advance, balance on BL copy".to_string(),
            specifications: "export packing, 25kg bags".to_string(),
            status: self.status,
            negotiation_notes: Vec::new(),
            version: 1,
            created_at: now,
            updated_at: now,
        }
    }
}
