//! Quotation entity

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{DpqId, Money, PartyId, ProductId, RfqId, TradeError};
use domain_rfq::Rfq;

/// Quotation lifecycle status
///
/// `draft -> negotiated -> {accepted | rejected | converted}`. The buyer
/// resolves the document (accept/reject/negotiate); only the gatekeeper
/// converts an accepted quotation into an order. `converted` and `rejected`
/// are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DpqStatus {
    Draft,
    Negotiated,
    Accepted,
    Rejected,
    Converted,
}

impl std::fmt::Display for DpqStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            DpqStatus::Draft => "draft",
            DpqStatus::Negotiated => "negotiated",
            DpqStatus::Accepted => "accepted",
            DpqStatus::Rejected => "rejected",
            DpqStatus::Converted => "converted",
        };
        write!(f, "{s}")
    }
}

/// A buyer negotiation message recorded on the quotation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NegotiationNote {
    pub author: PartyId,
    pub message: String,
    pub noted_at: DateTime<Utc>,
}

/// A draft product quotation derived from exactly one RFQ
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quotation {
    /// Unique identifier
    pub id: DpqId,
    /// Parent RFQ
    pub rfq_id: RfqId,
    /// Product, copied from the parent RFQ
    pub product_id: ProductId,
    /// Buyer, copied from the parent RFQ
    pub buyer_id: PartyId,
    /// Quantity, copied from the parent RFQ
    pub quantity: u32,
    /// Quoted unit price
    pub unit_price: Money,
    /// Delivery port
    pub delivery_port: Option<String>,
    /// Delivery date
    pub delivery_date: Option<NaiveDate>,
    /// Payment terms
    pub payment_terms: String,
    /// Free-text specifications
    pub specifications: String,
    /// Lifecycle status
    pub status: DpqStatus,
    /// Buyer negotiation messages
    pub negotiation_notes: Vec<NegotiationNote>,
    /// Version for optimistic concurrency
    pub version: u32,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Quotation {
    /// Creates a draft quotation from its parent RFQ.
    ///
    /// Buyer, product, and quantity are copied from the RFQ so the
    /// derivation invariant holds by construction.
    pub fn from_rfq(
        rfq: &Rfq,
        unit_price: Money,
        specifications: String,
        delivery_port: Option<String>,
        delivery_date: Option<NaiveDate>,
        payment_terms: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: DpqId::new_v7(),
            rfq_id: rfq.id,
            product_id: rfq.product_id,
            buyer_id: rfq.buyer_id,
            quantity: rfq.quantity,
            unit_price,
            delivery_port,
            delivery_date,
            payment_terms,
            specifications,
            status: DpqStatus::Draft,
            negotiation_notes: Vec::new(),
            version: 1,
            created_at: now,
            updated_at: now,
        }
    }

    /// Total quoted value
    pub fn total_value(&self) -> Money {
        self.unit_price.line_total(self.quantity)
    }

    /// Buyer requests changes. Legal from `draft` only: one open
    /// negotiation round at a time, the gatekeeper must revise before the
    /// buyer can comment again.
    pub fn negotiate(&mut self, author: PartyId, message: String) -> Result<(), TradeError> {
        match self.status {
            DpqStatus::Draft => {
                self.status = DpqStatus::Negotiated;
                let now = Utc::now();
                self.negotiation_notes.push(NegotiationNote {
                    author,
                    message,
                    noted_at: now,
                });
                self.updated_at = now;
                Ok(())
            }
            current => Err(TradeError::invalid_state("negotiate quotation", current)),
        }
    }

    /// Buyer accepts the quoted terms. Legal from `draft` or `negotiated`,
    /// so a revised quotation can still be resolved.
    pub fn accept(&mut self) -> Result<(), TradeError> {
        match self.status {
            DpqStatus::Draft | DpqStatus::Negotiated => {
                self.status = DpqStatus::Accepted;
                self.updated_at = Utc::now();
                Ok(())
            }
            current => Err(TradeError::invalid_state("accept quotation", current)),
        }
    }

    /// Buyer rejects the quotation. Terminal.
    pub fn reject(&mut self) -> Result<(), TradeError> {
        match self.status {
            DpqStatus::Draft | DpqStatus::Negotiated => {
                self.status = DpqStatus::Rejected;
                self.updated_at = Utc::now();
                Ok(())
            }
            current => Err(TradeError::invalid_state("reject quotation", current)),
        }
    }

    /// Gatekeeper revises the quoted terms after the buyer asked for
    /// changes. Legal from `negotiated` only; the status stays
    /// `negotiated` until the buyer re-acts.
    pub fn revise(
        &mut self,
        unit_price: Money,
        specifications: String,
        delivery_port: Option<String>,
        delivery_date: Option<NaiveDate>,
        payment_terms: String,
    ) -> Result<(), TradeError> {
        match self.status {
            DpqStatus::Negotiated => {
                self.unit_price = unit_price;
                self.specifications = specifications;
                self.delivery_port = delivery_port;
                self.delivery_date = delivery_date;
                self.payment_terms = payment_terms;
                self.updated_at = Utc::now();
                Ok(())
            }
            current => Err(TradeError::invalid_state("revise quotation", current)),
        }
    }

    /// Marks the quotation converted into an order.
    ///
    /// Legal only from `accepted` (a binding order requires buyer
    /// consent). An already-converted quotation reports `Conflict`: the
    /// conflicting order exists.
    pub fn mark_converted(&mut self) -> Result<(), TradeError> {
        match self.status {
            DpqStatus::Accepted => {
                self.status = DpqStatus::Converted;
                self.updated_at = Utc::now();
                Ok(())
            }
            DpqStatus::Converted => Err(TradeError::conflict(
                "quotation is already converted into an order",
            )),
            current => Err(TradeError::invalid_state("convert quotation", current)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::Currency;
    use domain_rfq::RfqStatus;
    use rust_decimal::Decimal;

    fn parent_rfq() -> Rfq {
        let now = Utc::now();
        Rfq {
            id: RfqId::new(),
            product_id: ProductId::new(),
            buyer_id: PartyId::new(),
            quantity: 40,
            budget_min: None,
            budget_max: None,
            response_deadline: None,
            description: None,
            status: RfqStatus::Accepted,
            responses: Vec::new(),
            version: 2,
            created_at: now,
            updated_at: now,
        }
    }

    fn draft_quotation() -> (Rfq, Quotation) {
        let rfq = parent_rfq();
        let dpq = Quotation::from_rfq(
            &rfq,
            Money::new(Decimal::new(5000, 2), Currency::USD),
            "grade A, vacuum packed".to_string(),
            Some("Rotterdam".to_string()),
            None,
            "30% advance, 70% on delivery".to_string(),
        );
        (rfq, dpq)
    }

    #[test]
    fn test_derivation_copies_rfq_fields() {
        let (rfq, dpq) = draft_quotation();
        assert_eq!(dpq.buyer_id, rfq.buyer_id);
        assert_eq!(dpq.product_id, rfq.product_id);
        assert_eq!(dpq.quantity, rfq.quantity);
        assert_eq!(dpq.rfq_id, rfq.id);
        assert_eq!(dpq.status, DpqStatus::Draft);
    }

    #[test]
    fn test_total_value() {
        let (_, dpq) = draft_quotation();
        assert_eq!(dpq.total_value().amount(), Decimal::new(200000, 2));
    }

    #[test]
    fn test_negotiate_then_accept() {
        let (rfq, mut dpq) = draft_quotation();
        dpq.negotiate(rfq.buyer_id, "need delivery by October".into())
            .unwrap();
        assert_eq!(dpq.status, DpqStatus::Negotiated);
        dpq.accept().unwrap();
        assert_eq!(dpq.status, DpqStatus::Accepted);
    }

    #[test]
    fn test_negotiate_twice_requires_revision() {
        let (rfq, mut dpq) = draft_quotation();
        dpq.negotiate(rfq.buyer_id, "first round".into()).unwrap();
        let err = dpq
            .negotiate(rfq.buyer_id, "second round".into())
            .unwrap_err();
        assert!(matches!(err, TradeError::InvalidState { .. }));
    }

    #[test]
    fn test_revise_only_while_negotiated() {
        let (_, mut dpq) = draft_quotation();
        let price = Money::new(Decimal::new(4500, 2), Currency::USD);
        let err = dpq
            .revise(price, "updated".into(), None, None, "unchanged".into())
            .unwrap_err();
        assert!(matches!(err, TradeError::InvalidState { .. }));
    }

    #[test]
    fn test_revision_keeps_negotiated_status() {
        let (rfq, mut dpq) = draft_quotation();
        dpq.negotiate(rfq.buyer_id, "lower the price".into()).unwrap();
        let price = Money::new(Decimal::new(4500, 2), Currency::USD);
        dpq.revise(price, "updated".into(), None, None, "unchanged".into())
            .unwrap();
        assert_eq!(dpq.status, DpqStatus::Negotiated);
        assert_eq!(dpq.unit_price, price);
    }

    #[test]
    fn test_convert_requires_acceptance() {
        let (_, mut dpq) = draft_quotation();
        assert!(matches!(
            dpq.mark_converted(),
            Err(TradeError::InvalidState { .. })
        ));

        dpq.accept().unwrap();
        dpq.mark_converted().unwrap();
        assert_eq!(dpq.status, DpqStatus::Converted);
    }

    #[test]
    fn test_double_convert_is_conflict() {
        let (_, mut dpq) = draft_quotation();
        dpq.accept().unwrap();
        dpq.mark_converted().unwrap();
        assert!(matches!(dpq.mark_converted(), Err(TradeError::Conflict(_))));
    }

    #[test]
    fn test_reject_is_terminal() {
        let (_, mut dpq) = draft_quotation();
        dpq.reject().unwrap();
        assert!(matches!(dpq.accept(), Err(TradeError::InvalidState { .. })));
        assert!(matches!(
            dpq.mark_converted(),
            Err(TradeError::InvalidState { .. })
        ));
    }
}
