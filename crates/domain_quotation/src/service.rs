//! Quotation lifecycle manager

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use core_kernel::{DocumentRef, DpqId, FreezeGuard, Money, PartyId, RfqId, TradeError};
use domain_access::{ensure_allowed, ActingUser, TransitionKind};
use domain_rfq::{Rfq, RfqStore};

use crate::ports::QuotationStore;
use crate::quotation::{DpqStatus, Quotation};

/// Input for accepting an RFQ and issuing its quotation
#[derive(Debug, Clone)]
pub struct AcceptRfq {
    pub rfq_id: RfqId,
    pub final_price: Money,
    pub specifications: String,
    pub delivery_port: Option<String>,
    pub delivery_date: Option<NaiveDate>,
    pub payment_terms: String,
    pub message: String,
}

/// Input for revising a negotiated quotation
#[derive(Debug, Clone)]
pub struct ReviseQuotation {
    pub unit_price: Money,
    pub specifications: String,
    pub delivery_port: Option<String>,
    pub delivery_date: Option<NaiveDate>,
    pub payment_terms: String,
}

/// Service owning the quotation state machine
pub struct QuotationService {
    rfqs: Arc<dyn RfqStore>,
    quotations: Arc<dyn QuotationStore>,
    freeze: Arc<dyn FreezeGuard>,
}

impl QuotationService {
    pub fn new(
        rfqs: Arc<dyn RfqStore>,
        quotations: Arc<dyn QuotationStore>,
        freeze: Arc<dyn FreezeGuard>,
    ) -> Self {
        Self {
            rfqs,
            quotations,
            freeze,
        }
    }

    /// Accepts an RFQ and issues the derived quotation. Gatekeeper-only.
    ///
    /// The RFQ is claimed first through a versioned status write; only the
    /// winner of a race inserts the quotation, so an RFQ never carries two.
    pub async fn accept_rfq_and_create_dpq(
        &self,
        acting: ActingUser,
        input: AcceptRfq,
    ) -> Result<(Rfq, Quotation), TradeError> {
        ensure_allowed(acting.role, TransitionKind::IssueQuotation)?;

        if !input.final_price.is_positive() {
            return Err(TradeError::validation("final price must be positive"));
        }

        if self.freeze.is_frozen(DocumentRef::Rfq(input.rfq_id)).await? {
            return Err(TradeError::conflict("RFQ is frozen by an open dispute"));
        }

        let mut rfq = self
            .rfqs
            .get(input.rfq_id)
            .await
            .map_err(|_| TradeError::not_found("RFQ", input.rfq_id))?;

        if self.quotations.find_by_rfq(rfq.id).await?.is_some() {
            return Err(TradeError::conflict(
                "a quotation already exists for this RFQ",
            ));
        }

        let expected = rfq.version;
        rfq.mark_accepted(acting.user_id, input.message)?;
        let rfq = self.rfqs.update(expected, rfq).await?;

        let quotation = Quotation::from_rfq(
            &rfq,
            input.final_price,
            input.specifications,
            input.delivery_port,
            input.delivery_date,
            input.payment_terms,
        );
        self.quotations.insert(quotation.clone()).await?;

        info!(
            rfq = %rfq.id,
            quotation = %quotation.id,
            price = %quotation.unit_price,
            "RFQ accepted, quotation issued"
        );
        Ok((rfq, quotation))
    }

    /// Revises a quotation the buyer has asked changes for.
    /// Gatekeeper-only; legal only while `negotiated`, and the status stays
    /// `negotiated` until the buyer re-acts.
    pub async fn update_quotation(
        &self,
        acting: ActingUser,
        dpq_id: DpqId,
        input: ReviseQuotation,
    ) -> Result<Quotation, TradeError> {
        ensure_allowed(acting.role, TransitionKind::UpdateQuotation)?;

        if !input.unit_price.is_positive() {
            return Err(TradeError::validation("unit price must be positive"));
        }

        self.ensure_not_frozen(dpq_id).await?;

        let mut quotation = self.load(dpq_id).await?;
        let expected = quotation.version;
        quotation.revise(
            input.unit_price,
            input.specifications,
            input.delivery_port,
            input.delivery_date,
            input.payment_terms,
        )?;

        let stored = self.quotations.update(expected, quotation).await?;
        info!(quotation = %dpq_id, price = %stored.unit_price, "quotation revised");
        Ok(stored)
    }

    /// Buyer requests changes. Ownership-checked: only the user referenced
    /// as buyer on this quotation may call this, regardless of role code.
    pub async fn buyer_negotiate(
        &self,
        acting: ActingUser,
        dpq_id: DpqId,
        message: String,
    ) -> Result<Quotation, TradeError> {
        if message.trim().is_empty() {
            return Err(TradeError::validation(
                "a negotiation request needs a message",
            ));
        }

        self.ensure_not_frozen(dpq_id).await?;

        let mut quotation = self.load(dpq_id).await?;
        Self::ensure_buyer(acting, &quotation)?;
        ensure_allowed(acting.role, TransitionKind::NegotiateQuotation)?;

        let expected = quotation.version;
        quotation.negotiate(acting.user_id, message)?;

        let stored = self.quotations.update(expected, quotation).await?;
        info!(quotation = %dpq_id, buyer = %acting.user_id, "buyer requested negotiation");
        Ok(stored)
    }

    /// Buyer accepts the quoted terms. Ownership-checked.
    pub async fn buyer_accept(
        &self,
        acting: ActingUser,
        dpq_id: DpqId,
    ) -> Result<Quotation, TradeError> {
        self.ensure_not_frozen(dpq_id).await?;

        let mut quotation = self.load(dpq_id).await?;
        Self::ensure_buyer(acting, &quotation)?;
        ensure_allowed(acting.role, TransitionKind::AcceptQuotation)?;

        let expected = quotation.version;
        quotation.accept()?;

        let stored = self.quotations.update(expected, quotation).await?;
        info!(quotation = %dpq_id, buyer = %acting.user_id, "quotation accepted by buyer");
        Ok(stored)
    }

    /// Buyer rejects the quotation. Ownership-checked; terminal.
    pub async fn buyer_reject(
        &self,
        acting: ActingUser,
        dpq_id: DpqId,
    ) -> Result<Quotation, TradeError> {
        self.ensure_not_frozen(dpq_id).await?;

        let mut quotation = self.load(dpq_id).await?;
        Self::ensure_buyer(acting, &quotation)?;
        ensure_allowed(acting.role, TransitionKind::RejectQuotation)?;

        let expected = quotation.version;
        quotation.reject()?;

        let stored = self.quotations.update(expected, quotation).await?;
        info!(quotation = %dpq_id, buyer = %acting.user_id, "quotation rejected by buyer");
        Ok(stored)
    }

    /// Retrieves a quotation
    pub async fn get(&self, id: DpqId) -> Result<Quotation, TradeError> {
        self.load(id).await
    }

    /// Lists quotations by status
    pub async fn list_by_status(&self, status: DpqStatus) -> Result<Vec<Quotation>, TradeError> {
        Ok(self.quotations.list_by_status(status).await?)
    }

    /// Lists a buyer's quotations
    pub async fn list_by_buyer(&self, buyer_id: PartyId) -> Result<Vec<Quotation>, TradeError> {
        Ok(self.quotations.list_by_buyer(buyer_id).await?)
    }

    async fn load(&self, id: DpqId) -> Result<Quotation, TradeError> {
        self.quotations
            .get(id)
            .await
            .map_err(|_| TradeError::not_found("quotation", id))
    }

    async fn ensure_not_frozen(&self, id: DpqId) -> Result<(), TradeError> {
        if self.freeze.is_frozen(DocumentRef::Quotation(id)).await? {
            return Err(TradeError::conflict(
                "quotation is frozen by an open dispute",
            ));
        }
        Ok(())
    }

    fn ensure_buyer(acting: ActingUser, quotation: &Quotation) -> Result<(), TradeError> {
        if quotation.buyer_id != acting.user_id {
            return Err(TradeError::forbidden(
                "only the buyer on this quotation may resolve it",
            ));
        }
        Ok(())
    }
}
