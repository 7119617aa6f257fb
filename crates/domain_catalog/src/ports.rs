//! Catalog domain ports

use async_trait::async_trait;

use core_kernel::{DomainPort, PartyId, PortError, ProductId};

use crate::product::{Product, ProductStatus};

/// Port for product storage
///
/// `update` is guarded by the version precondition: a mismatch between
/// `expected_version` and the stored record fails with `PortError::Conflict`
/// without writing.
#[async_trait]
pub trait ProductStore: DomainPort {
    /// Retrieves a product by id
    async fn get(&self, id: ProductId) -> Result<Product, PortError>;

    /// Inserts a new product
    async fn insert(&self, product: Product) -> Result<(), PortError>;

    /// Replaces a product, guarded by the version precondition
    async fn update(&self, expected_version: u32, product: Product) -> Result<Product, PortError>;

    /// Lists products by stored status
    async fn list_by_status(&self, status: ProductStatus) -> Result<Vec<Product>, PortError>;

    /// Lists a seller's products
    async fn list_by_seller(&self, seller_id: PartyId) -> Result<Vec<Product>, PortError>;
}
