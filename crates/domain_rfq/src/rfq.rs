//! RFQ entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{Money, PartyId, ProductId, RfqId, TradeError};

/// RFQ lifecycle status
///
/// `open -> negotiation_requested -> {accepted | rejected}`. Both `accepted`
/// and `rejected` are terminal for the RFQ itself; acceptance hands the
/// trade intent over to the derived quotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RfqStatus {
    Open,
    NegotiationRequested,
    Accepted,
    Rejected,
}

impl std::fmt::Display for RfqStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            RfqStatus::Open => "open",
            RfqStatus::NegotiationRequested => "negotiation_requested",
            RfqStatus::Accepted => "accepted",
            RfqStatus::Rejected => "rejected",
        };
        write!(f, "{s}")
    }
}

/// Gatekeeper response actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RespondAction {
    Negotiate,
    ProvideQuotation,
    Accept,
    Reject,
}

/// A recorded response message on the RFQ
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseMessage {
    pub actor: PartyId,
    pub action: RespondAction,
    pub message: String,
    pub responded_at: DateTime<Utc>,
}

/// A buyer's request for quotation against a product
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rfq {
    /// Unique identifier
    pub id: RfqId,
    /// Referenced product
    pub product_id: ProductId,
    /// Referenced buyer (document owner)
    pub buyer_id: PartyId,
    /// Requested quantity
    pub quantity: u32,
    /// Optional budget range lower bound
    pub budget_min: Option<Money>,
    /// Optional budget range upper bound
    pub budget_max: Option<Money>,
    /// Optional response deadline
    pub response_deadline: Option<DateTime<Utc>>,
    /// Free-text description
    pub description: Option<String>,
    /// Lifecycle status
    pub status: RfqStatus,
    /// Recorded gatekeeper responses
    pub responses: Vec<ResponseMessage>,
    /// Version for optimistic concurrency
    pub version: u32,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Rfq {
    /// Returns true once no further response is possible
    pub fn is_terminal(&self) -> bool {
        matches!(self.status, RfqStatus::Accepted | RfqStatus::Rejected)
    }

    /// Records a negotiation-style response and moves the RFQ to
    /// `negotiation_requested`
    pub fn request_negotiation(
        &mut self,
        actor: PartyId,
        action: RespondAction,
        message: String,
    ) -> Result<(), TradeError> {
        match self.status {
            RfqStatus::Open | RfqStatus::NegotiationRequested => {
                self.status = RfqStatus::NegotiationRequested;
                self.push_response(actor, action, message);
                Ok(())
            }
            current => Err(TradeError::invalid_state("respond to RFQ", current)),
        }
    }

    /// Marks the RFQ accepted. The caller is responsible for creating the
    /// derived quotation in the same logical operation.
    pub fn mark_accepted(&mut self, actor: PartyId, message: String) -> Result<(), TradeError> {
        match self.status {
            RfqStatus::Open | RfqStatus::NegotiationRequested => {
                self.status = RfqStatus::Accepted;
                self.push_response(actor, RespondAction::Accept, message);
                Ok(())
            }
            current => Err(TradeError::invalid_state("accept RFQ", current)),
        }
    }

    /// Rejects the RFQ. Terminal: any later response attempt fails.
    pub fn reject(&mut self, actor: PartyId, message: String) -> Result<(), TradeError> {
        match self.status {
            RfqStatus::Open | RfqStatus::NegotiationRequested => {
                self.status = RfqStatus::Rejected;
                self.push_response(actor, RespondAction::Reject, message);
                Ok(())
            }
            current => Err(TradeError::invalid_state("reject RFQ", current)),
        }
    }

    fn push_response(&mut self, actor: PartyId, action: RespondAction, message: String) {
        let now = Utc::now();
        self.responses.push(ResponseMessage {
            actor,
            action,
            message,
            responded_at: now,
        });
        self.updated_at = now;
    }
}
