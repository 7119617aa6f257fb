//! Purchase order lifecycle domain.
//!
//! Orders are derived from accepted quotations and advance through a
//! strictly linear fulfillment progression.

pub mod order;
pub mod ports;
pub mod service;

pub use order::{Order, OrderStatus};
pub use ports::OrderStore;
pub use service::OrderService;
