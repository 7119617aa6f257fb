//! Catalog service

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use core_kernel::{Money, PartyId, ProductId, TradeError};
use domain_access::{ensure_allowed, ActingUser, TransitionKind};

use crate::ports::ProductStore;
use crate::product::{Incoterm, Product, ProductStatus};

/// Input for submitting a new product offer
#[derive(Debug, Clone)]
pub struct SubmitProduct {
    pub name: String,
    pub category: String,
    pub unit_price: Money,
    pub min_order_quantity: u32,
    pub available_quantity: u32,
    pub incoterm: Incoterm,
    pub relabeling_allowed: bool,
    pub offer_valid_until: DateTime<Utc>,
}

/// Service for the product approval lifecycle
pub struct CatalogService {
    products: Arc<dyn ProductStore>,
}

impl CatalogService {
    pub fn new(products: Arc<dyn ProductStore>) -> Self {
        Self { products }
    }

    /// Submits a new product offer. Seller-only.
    pub async fn submit(
        &self,
        acting: ActingUser,
        input: SubmitProduct,
    ) -> Result<Product, TradeError> {
        ensure_allowed(acting.role, TransitionKind::SubmitProduct)?;

        if input.name.trim().is_empty() {
            return Err(TradeError::validation("product name must not be empty"));
        }
        if !input.unit_price.is_positive() {
            return Err(TradeError::validation("unit price must be positive"));
        }
        if input.min_order_quantity == 0 {
            return Err(TradeError::validation(
                "minimum order quantity must be positive",
            ));
        }
        if input.available_quantity < input.min_order_quantity {
            return Err(TradeError::validation(
                "available quantity must cover the minimum order quantity",
            ));
        }
        let now = Utc::now();
        if input.offer_valid_until <= now {
            return Err(TradeError::validation(
                "offer validity must lie in the future",
            ));
        }

        let product = Product {
            id: ProductId::new_v7(),
            name: input.name,
            category: input.category,
            unit_price: input.unit_price,
            min_order_quantity: input.min_order_quantity,
            available_quantity: input.available_quantity,
            incoterm: input.incoterm,
            relabeling_allowed: input.relabeling_allowed,
            offer_valid_until: input.offer_valid_until,
            seller_id: acting.user_id,
            status: ProductStatus::Submitted,
            version: 1,
            created_at: now,
            updated_at: now,
        };

        self.products.insert(product.clone()).await?;
        info!(product = %product.id, seller = %acting.user_id, "product submitted");
        Ok(product)
    }

    /// Approves a submitted product. Gatekeeper-only.
    pub async fn approve(
        &self,
        acting: ActingUser,
        id: ProductId,
    ) -> Result<Product, TradeError> {
        ensure_allowed(acting.role, TransitionKind::ApproveProduct)?;

        let mut product = self
            .products
            .get(id)
            .await
            .map_err(|_| TradeError::not_found("product", id))?;
        let expected = product.version;
        product.approve()?;

        let stored = self.products.update(expected, product).await?;
        info!(product = %id, "product approved");
        Ok(stored)
    }

    /// Rejects a submitted product. Gatekeeper-only.
    pub async fn reject(
        &self,
        acting: ActingUser,
        id: ProductId,
    ) -> Result<Product, TradeError> {
        ensure_allowed(acting.role, TransitionKind::RejectProduct)?;

        let mut product = self
            .products
            .get(id)
            .await
            .map_err(|_| TradeError::not_found("product", id))?;
        let expected = product.version;
        product.reject()?;

        let stored = self.products.update(expected, product).await?;
        info!(product = %id, "product rejected");
        Ok(stored)
    }

    /// Retrieves a product; a lapsed offer validity reads as `expired`
    pub async fn get(&self, id: ProductId) -> Result<Product, TradeError> {
        let mut product = self
            .products
            .get(id)
            .await
            .map_err(|_| TradeError::not_found("product", id))?;
        product.status = product.effective_status(Utc::now());
        Ok(product)
    }

    /// Lists products by status
    pub async fn list_by_status(
        &self,
        status: ProductStatus,
    ) -> Result<Vec<Product>, TradeError> {
        Ok(self.products.list_by_status(status).await?)
    }

    /// Lists a seller's products
    pub async fn list_by_seller(&self, seller_id: PartyId) -> Result<Vec<Product>, TradeError> {
        Ok(self.products.list_by_seller(seller_id).await?)
    }
}
