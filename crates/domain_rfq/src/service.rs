//! RFQ lifecycle manager

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use core_kernel::{DocumentRef, FreezeGuard, Money, PartyId, RfqId, TradeError};
use domain_access::{ensure_allowed, ActingUser, TransitionKind};
use domain_catalog::ProductStore;

use crate::ports::RfqStore;
use crate::rfq::{RespondAction, Rfq, RfqStatus};

/// Input for creating an RFQ
#[derive(Debug, Clone)]
pub struct CreateRfq {
    pub product_id: core_kernel::ProductId,
    pub quantity: u32,
    pub description: Option<String>,
    pub budget_min: Option<Money>,
    pub budget_max: Option<Money>,
    pub response_deadline: Option<DateTime<Utc>>,
}

/// Service owning the RFQ state machine
///
/// The `accept` response is not handled here: accepting an RFQ issues a
/// quotation, which is the quotation manager's operation.
pub struct RfqService {
    rfqs: Arc<dyn RfqStore>,
    products: Arc<dyn ProductStore>,
    freeze: Arc<dyn FreezeGuard>,
}

impl RfqService {
    pub fn new(
        rfqs: Arc<dyn RfqStore>,
        products: Arc<dyn ProductStore>,
        freeze: Arc<dyn FreezeGuard>,
    ) -> Self {
        Self {
            rfqs,
            products,
            freeze,
        }
    }

    /// Creates an RFQ against an approved product. Buyer-only.
    pub async fn create(&self, acting: ActingUser, input: CreateRfq) -> Result<Rfq, TradeError> {
        ensure_allowed(acting.role, TransitionKind::CreateRfq)?;

        if input.quantity == 0 {
            return Err(TradeError::validation("quantity must be positive"));
        }

        let now = Utc::now();
        let product = self
            .products
            .get(input.product_id)
            .await
            .map_err(|_| TradeError::validation("product does not exist"))?;

        if !product.is_orderable(now) {
            return Err(TradeError::validation(format!(
                "product is not open for orders (status {})",
                product.effective_status(now)
            )));
        }
        if input.quantity < product.min_order_quantity {
            return Err(TradeError::validation(format!(
                "quantity is below the minimum order quantity of {}",
                product.min_order_quantity
            )));
        }
        if input.quantity > product.available_quantity {
            return Err(TradeError::validation(format!(
                "quantity exceeds the available quantity of {}",
                product.available_quantity
            )));
        }
        if let (Some(min), Some(max)) = (input.budget_min, input.budget_max) {
            if min.currency() != max.currency() {
                return Err(TradeError::validation(
                    "budget range bounds must share one currency",
                ));
            }
            if min.amount() > max.amount() {
                return Err(TradeError::validation(
                    "budget range minimum exceeds its maximum",
                ));
            }
        }
        if let Some(deadline) = input.response_deadline {
            if deadline <= now {
                return Err(TradeError::validation(
                    "response deadline must lie in the future",
                ));
            }
        }

        let rfq = Rfq {
            id: RfqId::new_v7(),
            product_id: input.product_id,
            buyer_id: acting.user_id,
            quantity: input.quantity,
            budget_min: input.budget_min,
            budget_max: input.budget_max,
            response_deadline: input.response_deadline,
            description: input.description,
            status: RfqStatus::Open,
            responses: Vec::new(),
            version: 1,
            created_at: now,
            updated_at: now,
        };

        self.rfqs.insert(rfq.clone()).await?;
        info!(rfq = %rfq.id, buyer = %acting.user_id, product = %input.product_id, "RFQ created");
        Ok(rfq)
    }

    /// Records a gatekeeper response on an RFQ. Gatekeeper-only.
    ///
    /// `negotiate` and `provide_quotation` require a non-empty message and
    /// move the RFQ to `negotiation_requested`; `reject` is terminal. The
    /// `accept` action belongs to the quotation manager.
    pub async fn respond(
        &self,
        acting: ActingUser,
        rfq_id: RfqId,
        action: RespondAction,
        message: String,
    ) -> Result<Rfq, TradeError> {
        ensure_allowed(acting.role, TransitionKind::RespondToRfq)?;

        if action == RespondAction::Accept {
            return Err(TradeError::validation(
                "accepting an RFQ issues a quotation; use the quotation manager",
            ));
        }

        if self.freeze.is_frozen(DocumentRef::Rfq(rfq_id)).await? {
            return Err(TradeError::conflict("RFQ is frozen by an open dispute"));
        }

        let mut rfq = self
            .rfqs
            .get(rfq_id)
            .await
            .map_err(|_| TradeError::not_found("RFQ", rfq_id))?;
        let expected = rfq.version;

        match action {
            RespondAction::Negotiate | RespondAction::ProvideQuotation => {
                if message.trim().is_empty() {
                    return Err(TradeError::validation(
                        "a negotiation response requires a message",
                    ));
                }
                rfq.request_negotiation(acting.user_id, action, message)?;
            }
            RespondAction::Reject => {
                rfq.reject(acting.user_id, message)?;
            }
            RespondAction::Accept => unreachable!("handled above"),
        }

        let stored = self.rfqs.update(expected, rfq).await?;
        info!(rfq = %rfq_id, ?action, status = %stored.status, "RFQ response recorded");
        Ok(stored)
    }

    /// Retrieves an RFQ
    pub async fn get(&self, id: RfqId) -> Result<Rfq, TradeError> {
        self.rfqs
            .get(id)
            .await
            .map_err(|_| TradeError::not_found("RFQ", id))
    }

    /// Lists RFQs by status
    pub async fn list_by_status(&self, status: RfqStatus) -> Result<Vec<Rfq>, TradeError> {
        Ok(self.rfqs.list_by_status(status).await?)
    }

    /// Lists a buyer's RFQs, verifying the caller owns them
    pub async fn list_by_buyer(&self, buyer_id: PartyId) -> Result<Vec<Rfq>, TradeError> {
        Ok(self.rfqs.list_by_buyer(buyer_id).await?)
    }

    /// Visibility check used by read endpoints: the owning buyer and the
    /// gatekeeping role may read an RFQ.
    pub fn may_view(acting: ActingUser, rfq: &Rfq) -> bool {
        acting.role.is_gatekeeper() || rfq.buyer_id == acting.user_id
    }
}
