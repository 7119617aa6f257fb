//! Cross-document workflow domain: the end-to-end tracker and the
//! dispute/arbitration hook that freezes documents under dispute.

pub mod dispute;
pub mod ports;
pub mod service;
pub mod tracker;

pub use dispute::{Dispute, DisputeStatus};
pub use ports::{DisputeStore, StatusProvider};
pub use service::{DisputeFreezeGuard, DisputeService};
pub use tracker::{StageStatus, WorkflowSnapshot, WorkflowTracker, STATUS_UNKNOWN};
