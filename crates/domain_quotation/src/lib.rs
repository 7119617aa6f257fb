//! Quotation Domain - draft product quotations (DPQ)
//!
//! A quotation is the gatekeeper's priced response to an RFQ: created from
//! exactly one RFQ, resolved by that RFQ's buyer, and converted into an
//! order by the gatekeeper once the buyer has accepted. An RFQ has at most
//! one live quotation at a time; re-negotiation revises the same document
//! rather than spawning a new one.

pub mod ports;
pub mod quotation;
pub mod service;

pub use ports::QuotationStore;
pub use quotation::{DpqStatus, NegotiationNote, Quotation};
pub use service::{AcceptRfq, QuotationService, ReviseQuotation};
