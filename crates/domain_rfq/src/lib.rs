//! RFQ Domain - requests for quotation
//!
//! An RFQ is a buyer-initiated trade inquiry against an approved product.
//! The buyer owns the document until a gatekeeper response exists; from
//! then on the gatekeeping role drives it. `rejected` is terminal;
//! `accepted` immediately yields a quotation (owned by `domain_quotation`).

pub mod ports;
pub mod rfq;
pub mod service;

pub use ports::RfqStore;
pub use rfq::{RespondAction, ResponseMessage, Rfq, RfqStatus};
pub use service::{CreateRfq, RfqService};
