//! Core Kernel - Foundational types and utilities for the trade marketplace
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Money types with precise decimal arithmetic
//! - Strongly-typed document and party identifiers
//! - The shared workflow error taxonomy
//! - Port infrastructure for swappable storage and collaborator adapters

pub mod error;
pub mod identifiers;
pub mod money;
pub mod ports;

pub use error::TradeError;
pub use identifiers::{
    DisputeId, DpoId, DpqId, PartyId, ProductId, RfqId, RoleId,
};
pub use money::{Currency, Money, MoneyError};
pub use ports::{DocumentRef, DomainPort, FreezeGuard, NoFreeze, PortError};
