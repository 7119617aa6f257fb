//! Catalog Domain - seller product offers
//!
//! A product is a seller's offered line item. It enters the marketplace as
//! `submitted`, is approved or rejected by the gatekeeping role, and expires
//! automatically once its offer-validity timestamp elapses. Only approved,
//! unexpired products can be the target of an RFQ.

pub mod ports;
pub mod product;
pub mod service;

pub use ports::ProductStore;
pub use product::{Incoterm, Product, ProductStatus};
pub use service::{CatalogService, SubmitProduct};
