//! Dispute service and the freeze guard it backs

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use core_kernel::{DisputeId, DocumentRef, FreezeGuard, PartyId, PortError, ProductId, TradeError};
use domain_access::{ensure_allowed, ActingUser, RoleCode, TransitionKind};
use domain_catalog::ProductStore;
use domain_order::OrderStore;
use domain_quotation::QuotationStore;
use domain_rfq::RfqStore;

use crate::dispute::Dispute;
use crate::ports::DisputeStore;

/// Service owning the dispute lifecycle
pub struct DisputeService {
    disputes: Arc<dyn DisputeStore>,
    rfqs: Arc<dyn RfqStore>,
    quotations: Arc<dyn QuotationStore>,
    orders: Arc<dyn OrderStore>,
    products: Arc<dyn ProductStore>,
}

impl DisputeService {
    pub fn new(
        disputes: Arc<dyn DisputeStore>,
        rfqs: Arc<dyn RfqStore>,
        quotations: Arc<dyn QuotationStore>,
        orders: Arc<dyn OrderStore>,
        products: Arc<dyn ProductStore>,
    ) -> Self {
        Self {
            disputes,
            rfqs,
            quotations,
            orders,
            products,
        }
    }

    /// Opens a dispute against a document, freezing it until resolution.
    /// Only a party to the trade (the document's buyer, the product's
    /// seller, the gatekeeper, or an arbitrator) may open one, and a
    /// document carries at most one open dispute.
    pub async fn open_dispute(
        &self,
        acting: ActingUser,
        document: DocumentRef,
        reason: String,
    ) -> Result<Dispute, TradeError> {
        ensure_allowed(acting.role, TransitionKind::OpenDispute)?;

        if reason.trim().is_empty() {
            return Err(TradeError::validation("a dispute needs a reason"));
        }

        self.ensure_party_to_trade(acting, document).await?;

        if let Some(existing) = self.disputes.find_open_by_document(document).await? {
            return Err(TradeError::conflict(format!(
                "document already has open dispute {}",
                existing.id
            )));
        }

        let dispute = Dispute::open(document, acting.user_id, reason);
        self.disputes.insert(dispute.clone()).await?;

        warn!(dispute = %dispute.id, ?document, "dispute opened, document frozen");
        Ok(dispute)
    }

    /// Resolves an open dispute, unfreezing its document. Arbitrator-only.
    pub async fn resolve(
        &self,
        acting: ActingUser,
        id: DisputeId,
        resolution: String,
    ) -> Result<Dispute, TradeError> {
        ensure_allowed(acting.role, TransitionKind::ResolveDispute)?;

        if resolution.trim().is_empty() {
            return Err(TradeError::validation("a resolution needs a summary"));
        }

        let mut dispute = self.load(id).await?;
        let expected = dispute.version;
        dispute.resolve(acting.user_id, resolution)?;

        let stored = self.disputes.update(expected, dispute).await?;
        info!(dispute = %id, "dispute resolved, document unfrozen");
        Ok(stored)
    }

    /// Retrieves a dispute
    pub async fn get(&self, id: DisputeId) -> Result<Dispute, TradeError> {
        self.load(id).await
    }

    /// Lists all open disputes
    pub async fn list_open(&self) -> Result<Vec<Dispute>, TradeError> {
        Ok(self.disputes.list_open().await?)
    }

    async fn load(&self, id: DisputeId) -> Result<Dispute, TradeError> {
        self.disputes
            .get(id)
            .await
            .map_err(|_| TradeError::not_found("dispute", id))
    }

    /// Resolves the disputed document and checks the caller against it.
    /// The gatekeeper and arbitrators stand outside the trade and may
    /// always open; everyone else must be the buyer on the document or
    /// the seller behind its product.
    async fn ensure_party_to_trade(
        &self,
        acting: ActingUser,
        document: DocumentRef,
    ) -> Result<(), TradeError> {
        if acting.role.is_gatekeeper() || acting.role == RoleCode::Arbitrator {
            return Ok(());
        }

        let (buyer_id, product_id): (PartyId, ProductId) = match document {
            DocumentRef::Rfq(id) => {
                let rfq = self
                    .rfqs
                    .get(id)
                    .await
                    .map_err(|_| TradeError::not_found("RFQ", id))?;
                (rfq.buyer_id, rfq.product_id)
            }
            DocumentRef::Quotation(id) => {
                let quotation = self
                    .quotations
                    .get(id)
                    .await
                    .map_err(|_| TradeError::not_found("quotation", id))?;
                (quotation.buyer_id, quotation.product_id)
            }
            DocumentRef::Order(id) => {
                let order = self
                    .orders
                    .get(id)
                    .await
                    .map_err(|_| TradeError::not_found("order", id))?;
                (order.buyer_id, order.product_id)
            }
        };

        if acting.user_id == buyer_id {
            return Ok(());
        }
        let seller_id = match self.products.get(product_id).await {
            Ok(product) => Some(product.seller_id),
            Err(_) => None,
        };
        if seller_id == Some(acting.user_id) {
            return Ok(());
        }

        Err(TradeError::forbidden(format!(
            "user {} is not a party to {document}",
            acting.user_id
        )))
    }
}

/// Freeze guard backed by the dispute store. A document is frozen exactly
/// while it carries an open dispute.
pub struct DisputeFreezeGuard {
    disputes: Arc<dyn DisputeStore>,
}

impl DisputeFreezeGuard {
    pub fn new(disputes: Arc<dyn DisputeStore>) -> Self {
        Self { disputes }
    }
}

#[async_trait]
impl FreezeGuard for DisputeFreezeGuard {
    async fn is_frozen(&self, document: DocumentRef) -> Result<bool, PortError> {
        Ok(self
            .disputes
            .find_open_by_document(document)
            .await?
            .is_some())
    }
}
