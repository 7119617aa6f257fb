//! Role codes and role records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use core_kernel::{PartyId, RoleId};

/// The marketplace role codes
///
/// A user has exactly one active role code at a time. The captain is the
/// gatekeeping role: the only role authorized to respond to RFQs, issue and
/// convert quotations, and progress orders. The fulfillment roles never
/// drive document transitions; they feed status into the workflow tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleCode {
    Buyer,
    Seller,
    /// The gatekeeping role
    Captain,
    Surveyor,
    Transporter,
    Logistics,
    Customs,
    Insurer,
    Payment,
    Arbitrator,
}

impl RoleCode {
    /// Returns the short code string
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleCode::Buyer => "buyer",
            RoleCode::Seller => "seller",
            RoleCode::Captain => "captain",
            RoleCode::Surveyor => "surveyor",
            RoleCode::Transporter => "transporter",
            RoleCode::Logistics => "logistics",
            RoleCode::Customs => "customs",
            RoleCode::Insurer => "insurer",
            RoleCode::Payment => "payment",
            RoleCode::Arbitrator => "arbitrator",
        }
    }

    /// Returns true for the gatekeeping role
    pub fn is_gatekeeper(&self) -> bool {
        matches!(self, RoleCode::Captain)
    }
}

impl fmt::Display for RoleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error parsing a role code string
#[derive(Debug, thiserror::Error)]
#[error("Unknown role code: {0}")]
pub struct UnknownRoleCode(pub String);

impl FromStr for RoleCode {
    type Err = UnknownRoleCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "buyer" => Ok(RoleCode::Buyer),
            "seller" => Ok(RoleCode::Seller),
            "captain" => Ok(RoleCode::Captain),
            "surveyor" => Ok(RoleCode::Surveyor),
            "transporter" => Ok(RoleCode::Transporter),
            "logistics" => Ok(RoleCode::Logistics),
            "customs" => Ok(RoleCode::Customs),
            "insurer" => Ok(RoleCode::Insurer),
            "payment" => Ok(RoleCode::Payment),
            "arbitrator" => Ok(RoleCode::Arbitrator),
            other => Err(UnknownRoleCode(other.to_string())),
        }
    }
}

/// A role record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    /// Unique identifier
    pub id: RoleId,
    /// Short code
    pub code: RoleCode,
    /// Display name
    pub display_name: String,
    /// Description
    pub description: String,
    /// Version for optimistic concurrency
    pub version: u32,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Role {
    /// Creates a new role record
    pub fn new(code: RoleCode, display_name: impl Into<String>, description: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: RoleId::new_v7(),
            code,
            display_name: display_name.into(),
            description: description.into(),
            version: 1,
            created_at: now,
            updated_at: now,
        }
    }
}

/// A user's single active role assignment
///
/// Many-to-one with users: reassignment is a destructive overwrite, not an
/// additive grant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleAssignment {
    pub user_id: PartyId,
    pub role: RoleCode,
    pub assigned_at: DateTime<Utc>,
}

impl RoleAssignment {
    pub fn new(user_id: PartyId, role: RoleCode) -> Self {
        Self {
            user_id,
            role,
            assigned_at: Utc::now(),
        }
    }
}

/// The authenticated user performing an operation
///
/// Carries the identity for per-document ownership checks alongside the
/// role code consulted by the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActingUser {
    pub user_id: PartyId,
    pub role: RoleCode,
}

impl ActingUser {
    pub fn new(user_id: PartyId, role: RoleCode) -> Self {
        Self { user_id, role }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_code_round_trip() {
        for code in [
            RoleCode::Buyer,
            RoleCode::Seller,
            RoleCode::Captain,
            RoleCode::Surveyor,
            RoleCode::Transporter,
            RoleCode::Logistics,
            RoleCode::Customs,
            RoleCode::Insurer,
            RoleCode::Payment,
            RoleCode::Arbitrator,
        ] {
            let parsed: RoleCode = code.as_str().parse().unwrap();
            assert_eq!(parsed, code);
        }
    }

    #[test]
    fn test_unknown_role_code() {
        assert!("admiral".parse::<RoleCode>().is_err());
    }

    #[test]
    fn test_only_captain_is_gatekeeper() {
        assert!(RoleCode::Captain.is_gatekeeper());
        assert!(!RoleCode::Buyer.is_gatekeeper());
        assert!(!RoleCode::Arbitrator.is_gatekeeper());
    }
}
