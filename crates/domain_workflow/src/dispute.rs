//! Dispute aggregate and arbitration hook

use chrono::{DateTime, Utc};
use core_kernel::{DisputeId, DocumentRef, PartyId, TradeError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisputeStatus {
    Open,
    Resolved,
}

impl std::fmt::Display for DisputeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Open => "open",
            Self::Resolved => "resolved",
        })
    }
}

/// A dispute raised against a trade document.
///
/// While a dispute is open the referenced document is frozen and all of
/// its lifecycle transitions fail with a conflict.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dispute {
    pub id: DisputeId,
    /// Document the dispute freezes
    pub document: DocumentRef,
    pub raised_by: PartyId,
    pub reason: String,
    pub status: DisputeStatus,
    pub resolution: Option<String>,
    pub resolved_by: Option<PartyId>,
    /// Version for optimistic concurrency
    pub version: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Dispute {
    pub fn open(document: DocumentRef, raised_by: PartyId, reason: String) -> Self {
        let now = Utc::now();
        Self {
            id: DisputeId::new_v7(),
            document,
            raised_by,
            reason,
            status: DisputeStatus::Open,
            resolution: None,
            resolved_by: None,
            version: 1,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_open(&self) -> bool {
        self.status == DisputeStatus::Open
    }

    /// `open` -> `resolved`. Resolution unfreezes the document.
    pub fn resolve(&mut self, arbitrator: PartyId, resolution: String) -> Result<(), TradeError> {
        if self.status != DisputeStatus::Open {
            return Err(TradeError::invalid_state("resolve dispute", self.status));
        }
        self.status = DisputeStatus::Resolved;
        self.resolution = Some(resolution);
        self.resolved_by = Some(arbitrator);
        self.updated_at = Utc::now();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::DpoId;

    fn open_dispute() -> Dispute {
        Dispute::open(
            DocumentRef::Order(DpoId::new_v7()),
            PartyId::new_v7(),
            "short shipment, 3 pallets missing".into(),
        )
    }

    #[test]
    fn new_dispute_is_open() {
        let dispute = open_dispute();
        assert!(dispute.is_open());
        assert_eq!(dispute.version, 1);
        assert!(dispute.resolution.is_none());
    }

    #[test]
    fn resolution_records_arbitrator_and_outcome() {
        let mut dispute = open_dispute();
        let arbitrator = PartyId::new_v7();

        dispute
            .resolve(arbitrator, "partial refund agreed".into())
            .unwrap();

        assert!(!dispute.is_open());
        assert_eq!(dispute.resolved_by, Some(arbitrator));
        assert_eq!(dispute.resolution.as_deref(), Some("partial refund agreed"));
    }

    #[test]
    fn resolving_twice_fails() {
        let mut dispute = open_dispute();
        dispute.resolve(PartyId::new_v7(), "settled".into()).unwrap();

        let err = dispute
            .resolve(PartyId::new_v7(), "settled again".into())
            .unwrap_err();
        match err {
            TradeError::InvalidState { current, .. } => assert_eq!(current, "resolved"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
