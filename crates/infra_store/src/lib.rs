//! In-memory adapters for every storage port in the workspace.
//!
//! All adapters enforce the versioned check-then-write contract: an update
//! whose `expected_version` does not match the stored record fails with
//! `PortError::Conflict` without writing, and a successful write bumps the
//! stored version by one.

pub mod catalog;
pub mod order;
pub mod quotation;
pub mod rfq;
pub mod roles;
pub mod workflow;

pub use catalog::InMemoryProductStore;
pub use order::InMemoryOrderStore;
pub use quotation::InMemoryQuotationStore;
pub use rfq::InMemoryRfqStore;
pub use roles::InMemoryRoleStore;
pub use workflow::{InMemoryDisputeStore, InMemoryStatusFeed, UnreachableProvider};
