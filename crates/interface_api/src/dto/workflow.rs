//! Workflow and dispute DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use core_kernel::DocumentRef;
use domain_workflow::{Dispute, WorkflowSnapshot};

use super::MoneyDto;

#[derive(Debug, Deserialize, Validate)]
pub struct OpenDisputeRequest {
    pub document: DocumentRef,
    #[validate(length(min = 1))]
    pub reason: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ResolveDisputeRequest {
    #[validate(length(min = 1))]
    pub resolution: String,
}

#[derive(Debug, Serialize)]
pub struct DisputeResponse {
    pub id: Uuid,
    pub document: DocumentRef,
    pub raised_by: Uuid,
    pub reason: String,
    pub status: String,
    pub resolution: Option<String>,
    pub resolved_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl From<Dispute> for DisputeResponse {
    fn from(dispute: Dispute) -> Self {
        Self {
            id: dispute.id.into(),
            document: dispute.document,
            raised_by: dispute.raised_by.into(),
            reason: dispute.reason,
            status: dispute.status.to_string(),
            resolution: dispute.resolution,
            resolved_by: dispute.resolved_by.map(Into::into),
            created_at: dispute.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StageStatusDto {
    pub stage: String,
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct WorkflowSnapshotResponse {
    pub order_id: Uuid,
    pub order_status: String,
    pub order_confirmation: String,
    pub dpq_id: Uuid,
    pub quotation_status: String,
    pub rfq_id: Uuid,
    pub rfq_status: String,
    pub total_value: MoneyDto,
    pub stages: Vec<StageStatusDto>,
}

impl From<WorkflowSnapshot> for WorkflowSnapshotResponse {
    fn from(snapshot: WorkflowSnapshot) -> Self {
        Self {
            order_id: snapshot.order_id.into(),
            order_status: snapshot.order_status,
            order_confirmation: snapshot.order_confirmation,
            dpq_id: snapshot.dpq_id.into(),
            quotation_status: snapshot.quotation_status,
            rfq_id: snapshot.rfq_id.into(),
            rfq_status: snapshot.rfq_status,
            total_value: snapshot.total_value.into(),
            stages: snapshot
                .stages
                .into_iter()
                .map(|stage| StageStatusDto {
                    stage: stage.stage,
                    status: stage.status,
                })
                .collect(),
        }
    }
}
