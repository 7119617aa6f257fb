//! In-memory product store

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use core_kernel::{DomainPort, PartyId, PortError, ProductId};
use domain_catalog::{Product, ProductStatus, ProductStore};

/// In-memory implementation of [`ProductStore`]
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    products: Arc<RwLock<HashMap<ProductId, Product>>>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DomainPort for InMemoryProductStore {}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn get(&self, id: ProductId) -> Result<Product, PortError> {
        self.products
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| PortError::not_found("Product", id))
    }

    async fn insert(&self, product: Product) -> Result<(), PortError> {
        let mut products = self.products.write().await;
        if products.contains_key(&product.id) {
            return Err(PortError::conflict(format!(
                "product {} already exists",
                product.id
            )));
        }
        products.insert(product.id, product);
        Ok(())
    }

    async fn update(
        &self,
        expected_version: u32,
        mut product: Product,
    ) -> Result<Product, PortError> {
        let mut products = self.products.write().await;
        let current = products
            .get(&product.id)
            .ok_or_else(|| PortError::not_found("Product", product.id))?;
        if current.version != expected_version {
            return Err(PortError::conflict(format!(
                "version mismatch on product {}: expected {}, found {}",
                product.id, expected_version, current.version
            )));
        }
        product.version = expected_version + 1;
        products.insert(product.id, product.clone());
        Ok(product)
    }

    async fn list_by_status(&self, status: ProductStatus) -> Result<Vec<Product>, PortError> {
        Ok(self
            .products
            .read()
            .await
            .values()
            .filter(|product| product.status == status)
            .cloned()
            .collect())
    }

    async fn list_by_seller(&self, seller_id: PartyId) -> Result<Vec<Product>, PortError> {
        Ok(self
            .products
            .read()
            .await
            .values()
            .filter(|product| product.seller_id == seller_id)
            .cloned()
            .collect())
    }
}
