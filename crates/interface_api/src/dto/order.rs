//! Order DTOs

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use domain_order::Order;

use super::MoneyDto;

#[derive(Debug, Serialize)]
pub struct OrderResponse {
    pub id: Uuid,
    pub dpq_id: Uuid,
    pub rfq_id: Uuid,
    pub product_id: Uuid,
    pub buyer_id: Uuid,
    pub quantity: u32,
    pub unit_price: MoneyDto,
    pub total_value: MoneyDto,
    pub delivery_port: Option<String>,
    pub delivery_date: Option<NaiveDate>,
    pub payment_terms: String,
    pub status: String,
    pub version: u32,
    pub created_at: DateTime<Utc>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id.into(),
            dpq_id: order.dpq_id.into(),
            rfq_id: order.rfq_id.into(),
            product_id: order.product_id.into(),
            buyer_id: order.buyer_id.into(),
            quantity: order.quantity,
            unit_price: order.unit_price.into(),
            total_value: order.total_value.into(),
            delivery_port: order.delivery_port,
            delivery_date: order.delivery_date,
            payment_terms: order.payment_terms,
            status: order.status.to_string(),
            version: order.version,
            created_at: order.created_at,
        }
    }
}
