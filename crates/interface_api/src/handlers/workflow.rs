//! Workflow tracker and dispute handlers

use axum::{
    extract::{Path, State},
    Extension, Json,
};
use uuid::Uuid;
use validator::Validate;

use domain_access::ActingUser;

use crate::dto::workflow::{
    DisputeResponse, OpenDisputeRequest, ResolveDisputeRequest, WorkflowSnapshotResponse,
};
use crate::{error::ApiError, AppState};

/// One consolidated workflow view for an order
pub async fn get_workflow(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<WorkflowSnapshotResponse>, ApiError> {
    let snapshot = state.tracker.snapshot(id.into()).await?;
    Ok(Json(snapshot.into()))
}

/// Opens a dispute against a trade document
pub async fn open_dispute(
    State(state): State<AppState>,
    Extension(acting): Extension<ActingUser>,
    Json(request): Json<OpenDisputeRequest>,
) -> Result<Json<DisputeResponse>, ApiError> {
    request.validate()?;
    let dispute = state
        .disputes
        .open_dispute(acting, request.document, request.reason)
        .await?;
    Ok(Json(dispute.into()))
}

/// Resolves an open dispute (arbitrator)
pub async fn resolve_dispute(
    State(state): State<AppState>,
    Extension(acting): Extension<ActingUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<ResolveDisputeRequest>,
) -> Result<Json<DisputeResponse>, ApiError> {
    request.validate()?;
    let dispute = state
        .disputes
        .resolve(acting, id.into(), request.resolution)
        .await?;
    Ok(Json(dispute.into()))
}

/// Lists open disputes
pub async fn list_open_disputes(
    State(state): State<AppState>,
) -> Result<Json<Vec<DisputeResponse>>, ApiError> {
    let disputes = state.disputes.list_open().await?;
    Ok(Json(disputes.into_iter().map(Into::into).collect()))
}
