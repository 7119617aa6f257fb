//! Quotation DTOs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use domain_quotation::{NegotiationNote, Quotation};

use super::MoneyDto;
use crate::dto::rfq::RfqResponse;

#[derive(Debug, Deserialize, Validate)]
pub struct ReviseQuotationRequest {
    pub unit_price: MoneyDto,
    #[validate(length(min = 1))]
    pub specifications: String,
    pub delivery_port: Option<String>,
    pub delivery_date: Option<NaiveDate>,
    #[validate(length(min = 1))]
    pub payment_terms: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct NegotiateQuotationRequest {
    #[validate(length(min = 1))]
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct NegotiationNoteDto {
    pub author: Uuid,
    pub message: String,
    pub noted_at: DateTime<Utc>,
}

impl From<NegotiationNote> for NegotiationNoteDto {
    fn from(note: NegotiationNote) -> Self {
        Self {
            author: note.author.into(),
            message: note.message,
            noted_at: note.noted_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct QuotationResponse {
    pub id: Uuid,
    pub rfq_id: Uuid,
    pub product_id: Uuid,
    pub buyer_id: Uuid,
    pub quantity: u32,
    pub unit_price: MoneyDto,
    pub total_value: MoneyDto,
    pub delivery_port: Option<String>,
    pub delivery_date: Option<NaiveDate>,
    pub payment_terms: String,
    pub specifications: String,
    pub status: String,
    pub negotiation_notes: Vec<NegotiationNoteDto>,
    pub version: u32,
    pub created_at: DateTime<Utc>,
}

impl From<Quotation> for QuotationResponse {
    fn from(quotation: Quotation) -> Self {
        let total_value = quotation.total_value();
        Self {
            id: quotation.id.into(),
            rfq_id: quotation.rfq_id.into(),
            product_id: quotation.product_id.into(),
            buyer_id: quotation.buyer_id.into(),
            quantity: quotation.quantity,
            unit_price: quotation.unit_price.into(),
            total_value: total_value.into(),
            delivery_port: quotation.delivery_port,
            delivery_date: quotation.delivery_date,
            payment_terms: quotation.payment_terms,
            specifications: quotation.specifications,
            status: quotation.status.to_string(),
            negotiation_notes: quotation
                .negotiation_notes
                .into_iter()
                .map(Into::into)
                .collect(),
            version: quotation.version,
            created_at: quotation.created_at,
        }
    }
}

/// Returned by RFQ acceptance: the closed RFQ and its new quotation
#[derive(Debug, Serialize)]
pub struct AcceptRfqResponse {
    pub rfq: RfqResponse,
    pub quotation: QuotationResponse,
}
