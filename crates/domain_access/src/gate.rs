//! The permission gate
//!
//! A pure transition table: which role code may invoke which transition on
//! which document type. Ownership ("the user referenced as buyer on that
//! specific document") is checked per-document by the lifecycle managers;
//! the gate only decides role-level permission.

use serde::{Deserialize, Serialize};

use core_kernel::TradeError;

use crate::role::RoleCode;

/// The document types governed by the gate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Product,
    Rfq,
    Quotation,
    Order,
    Dispute,
}

/// Named transitions across the document chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionKind {
    // Product approval
    SubmitProduct,
    ApproveProduct,
    RejectProduct,
    // RFQ
    CreateRfq,
    RespondToRfq,
    // Quotation
    IssueQuotation,
    UpdateQuotation,
    NegotiateQuotation,
    AcceptQuotation,
    RejectQuotation,
    ConvertQuotation,
    // Order
    ConfirmOrder,
    ProcessOrder,
    CompleteOrder,
    // Arbitration
    OpenDispute,
    ResolveDispute,
}

impl TransitionKind {
    /// Returns the document type this transition applies to
    pub fn document(&self) -> DocumentKind {
        use TransitionKind::*;
        match self {
            SubmitProduct | ApproveProduct | RejectProduct => DocumentKind::Product,
            CreateRfq | RespondToRfq => DocumentKind::Rfq,
            IssueQuotation | UpdateQuotation | NegotiateQuotation | AcceptQuotation
            | RejectQuotation | ConvertQuotation => DocumentKind::Quotation,
            ConfirmOrder | ProcessOrder | CompleteOrder => DocumentKind::Order,
            OpenDispute | ResolveDispute => DocumentKind::Dispute,
        }
    }
}

/// Decides whether `role` may invoke `transition` on `document`.
///
/// Each variant carries its permitted transition set explicitly; there is
/// no string comparison anywhere on this path.
pub fn can_transition(role: RoleCode, document: DocumentKind, transition: TransitionKind) -> bool {
    if transition.document() != document {
        return false;
    }

    use TransitionKind::*;
    match role {
        RoleCode::Captain => matches!(
            transition,
            ApproveProduct
                | RejectProduct
                | RespondToRfq
                | IssueQuotation
                | UpdateQuotation
                | ConvertQuotation
                | ConfirmOrder
                | ProcessOrder
                | CompleteOrder
                | OpenDispute
        ),
        RoleCode::Buyer => matches!(
            transition,
            CreateRfq | NegotiateQuotation | AcceptQuotation | RejectQuotation | OpenDispute
        ),
        RoleCode::Seller => matches!(transition, SubmitProduct | OpenDispute),
        RoleCode::Arbitrator => matches!(transition, OpenDispute | ResolveDispute),
        // Fulfillment roles report status; they never drive document
        // transitions.
        RoleCode::Surveyor
        | RoleCode::Transporter
        | RoleCode::Logistics
        | RoleCode::Customs
        | RoleCode::Insurer
        | RoleCode::Payment => false,
    }
}

/// Gate check returning `Forbidden` with the denied transition named
pub fn ensure_allowed(
    role: RoleCode,
    transition: TransitionKind,
) -> Result<(), TradeError> {
    if can_transition(role, transition.document(), transition) {
        Ok(())
    } else {
        Err(TradeError::forbidden(format!(
            "role {role} may not perform {transition:?}"
        )))
    }
}
