//! RFQ DTOs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use domain_rfq::{RespondAction, ResponseMessage, Rfq};

use super::MoneyDto;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateRfqRequest {
    pub product_id: Uuid,
    #[validate(range(min = 1))]
    pub quantity: u32,
    pub description: Option<String>,
    pub budget_min: Option<MoneyDto>,
    pub budget_max: Option<MoneyDto>,
    pub response_deadline: Option<DateTime<Utc>>,
}

/// A gatekeeper response. Accepting folds quotation issuance into the same
/// call, so the pricing fields are required exactly when `action` is
/// `accept`.
#[derive(Debug, Deserialize)]
pub struct RespondToRfqRequest {
    pub action: RespondAction,
    #[serde(default)]
    pub message: String,
    pub final_price: Option<MoneyDto>,
    pub specifications: Option<String>,
    pub delivery_port: Option<String>,
    pub delivery_date: Option<NaiveDate>,
    pub payment_terms: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RespondToRfqResponse {
    pub rfq: RfqResponse,
    /// Present only when the response accepted the RFQ
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quotation: Option<super::quotation::QuotationResponse>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct AcceptRfqRequest {
    pub final_price: MoneyDto,
    #[validate(length(min = 1))]
    pub specifications: String,
    pub delivery_port: Option<String>,
    pub delivery_date: Option<NaiveDate>,
    #[validate(length(min = 1))]
    pub payment_terms: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ResponseMessageDto {
    pub actor: Uuid,
    pub action: RespondAction,
    pub message: String,
    pub responded_at: DateTime<Utc>,
}

impl From<ResponseMessage> for ResponseMessageDto {
    fn from(msg: ResponseMessage) -> Self {
        Self {
            actor: msg.actor.into(),
            action: msg.action,
            message: msg.message,
            responded_at: msg.responded_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RfqResponse {
    pub id: Uuid,
    pub product_id: Uuid,
    pub buyer_id: Uuid,
    pub quantity: u32,
    pub budget_min: Option<MoneyDto>,
    pub budget_max: Option<MoneyDto>,
    pub response_deadline: Option<DateTime<Utc>>,
    pub description: Option<String>,
    pub status: String,
    pub responses: Vec<ResponseMessageDto>,
    pub version: u32,
    pub created_at: DateTime<Utc>,
}

impl From<Rfq> for RfqResponse {
    fn from(rfq: Rfq) -> Self {
        Self {
            id: rfq.id.into(),
            product_id: rfq.product_id.into(),
            buyer_id: rfq.buyer_id.into(),
            quantity: rfq.quantity,
            budget_min: rfq.budget_min.map(Into::into),
            budget_max: rfq.budget_max.map(Into::into),
            response_deadline: rfq.response_deadline,
            description: rfq.description,
            status: rfq.status.to_string(),
            responses: rfq.responses.into_iter().map(Into::into).collect(),
            version: rfq.version,
            created_at: rfq.created_at,
        }
    }
}
