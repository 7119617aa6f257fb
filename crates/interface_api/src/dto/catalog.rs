//! Catalog DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use domain_catalog::{Incoterm, Product};

use super::MoneyDto;

#[derive(Debug, Deserialize, Validate)]
pub struct SubmitProductRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(min = 1, max = 100))]
    pub category: String,
    pub unit_price: MoneyDto,
    #[validate(range(min = 1))]
    pub min_order_quantity: u32,
    pub available_quantity: u32,
    pub incoterm: Incoterm,
    #[serde(default)]
    pub relabeling_allowed: bool,
    pub offer_valid_until: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub unit_price: MoneyDto,
    pub min_order_quantity: u32,
    pub available_quantity: u32,
    pub incoterm: Incoterm,
    pub relabeling_allowed: bool,
    pub offer_valid_until: DateTime<Utc>,
    pub seller_id: Uuid,
    pub status: String,
    pub version: u32,
    pub created_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.into(),
            name: product.name,
            category: product.category,
            unit_price: product.unit_price.into(),
            min_order_quantity: product.min_order_quantity,
            available_quantity: product.available_quantity,
            incoterm: product.incoterm,
            relabeling_allowed: product.relabeling_allowed,
            offer_valid_until: product.offer_valid_until,
            seller_id: product.seller_id.into(),
            status: product.status.to_string(),
            version: product.version,
            created_at: product.created_at,
        }
    }
}
