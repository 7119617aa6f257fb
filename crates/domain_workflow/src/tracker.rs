//! End-to-end workflow tracker

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::warn;

use core_kernel::{DpoId, DpqId, Money, RfqId, TradeError};
use domain_order::{OrderStatus, OrderStore};
use domain_quotation::QuotationStore;
use domain_rfq::RfqStore;

use crate::ports::StatusProvider;

/// Status placeholder when a document or collaborator cannot be reached
pub const STATUS_UNKNOWN: &str = "unknown";

/// Status of one fulfillment stage as reported by its collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageStatus {
    pub stage: String,
    pub status: String,
}

/// One consolidated view of a trade, from the originating RFQ down to the
/// fulfillment stages of its order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowSnapshot {
    pub order_id: DpoId,
    pub order_status: String,
    /// Whether the gatekeeper has confirmed the order yet
    pub order_confirmation: String,
    pub dpq_id: DpqId,
    pub quotation_status: String,
    pub rfq_id: RfqId,
    pub rfq_status: String,
    pub total_value: Money,
    pub stages: Vec<StageStatus>,
}

/// Read-only tracker that walks an order back to its source documents and
/// polls the fulfillment collaborators.
///
/// The tracker never fails because a collaborator is down; unreachable
/// stages degrade to [`STATUS_UNKNOWN`]. Only a missing order is an error.
pub struct WorkflowTracker {
    orders: Arc<dyn OrderStore>,
    quotations: Arc<dyn QuotationStore>,
    rfqs: Arc<dyn RfqStore>,
    providers: Vec<Arc<dyn StatusProvider>>,
}

impl WorkflowTracker {
    pub fn new(
        orders: Arc<dyn OrderStore>,
        quotations: Arc<dyn QuotationStore>,
        rfqs: Arc<dyn RfqStore>,
        providers: Vec<Arc<dyn StatusProvider>>,
    ) -> Self {
        Self {
            orders,
            quotations,
            rfqs,
            providers,
        }
    }

    pub async fn snapshot(&self, order_id: DpoId) -> Result<WorkflowSnapshot, TradeError> {
        let order = self
            .orders
            .get(order_id)
            .await
            .map_err(|_| TradeError::not_found("order", order_id))?;

        let quotation_status = match self.quotations.get(order.dpq_id).await {
            Ok(quotation) => quotation.status.to_string(),
            Err(err) => {
                warn!(order = %order_id, dpq = %order.dpq_id, %err, "quotation unreachable");
                STATUS_UNKNOWN.to_string()
            }
        };

        let rfq_status = match self.rfqs.get(order.rfq_id).await {
            Ok(rfq) => rfq.status.to_string(),
            Err(err) => {
                warn!(order = %order_id, rfq = %order.rfq_id, %err, "RFQ unreachable");
                STATUS_UNKNOWN.to_string()
            }
        };

        let mut stages = Vec::with_capacity(self.providers.len());
        for provider in &self.providers {
            let status = match provider.status_for(order_id).await {
                Ok(status) => status,
                Err(err) => {
                    warn!(order = %order_id, stage = provider.stage(), %err, "collaborator unreachable");
                    STATUS_UNKNOWN.to_string()
                }
            };
            stages.push(StageStatus {
                stage: provider.stage().to_string(),
                status,
            });
        }

        let order_confirmation = if order.status == OrderStatus::Pending {
            "pending".to_string()
        } else {
            "confirmed".to_string()
        };

        Ok(WorkflowSnapshot {
            order_id: order.id,
            order_status: order.status.to_string(),
            order_confirmation,
            dpq_id: order.dpq_id,
            quotation_status,
            rfq_id: order.rfq_id,
            rfq_status,
            total_value: order.total_value,
            stages,
        })
    }
}
