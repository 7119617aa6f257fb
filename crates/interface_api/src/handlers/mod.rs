//! Request handlers, one module per domain surface

pub mod catalog;
pub mod health;
pub mod order;
pub mod quotation;
pub mod rfq;
pub mod roles;
pub mod workflow;
