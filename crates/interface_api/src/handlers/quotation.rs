//! Quotation handlers

use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use domain_access::ActingUser;
use domain_quotation::{DpqStatus, Quotation, ReviseQuotation};

use crate::dto::order::OrderResponse;
use crate::dto::quotation::{
    NegotiateQuotationRequest, QuotationResponse, ReviseQuotationRequest,
};
use crate::{error::ApiError, AppState};

#[derive(Debug, Deserialize)]
pub struct QuotationListQuery {
    pub status: Option<DpqStatus>,
}

fn ensure_party(acting: ActingUser, quotation: &Quotation) -> Result<(), ApiError> {
    if !acting.role.is_gatekeeper() && quotation.buyer_id != acting.user_id {
        return Err(ApiError::Forbidden(
            "not a party to this quotation".to_string(),
        ));
    }
    Ok(())
}

/// Lists quotations: the gatekeeper by status, a buyer their own
pub async fn list_quotations(
    State(state): State<AppState>,
    Extension(acting): Extension<ActingUser>,
    Query(query): Query<QuotationListQuery>,
) -> Result<Json<Vec<QuotationResponse>>, ApiError> {
    let quotations = if acting.role.is_gatekeeper() {
        state
            .quotations
            .list_by_status(query.status.unwrap_or(DpqStatus::Draft))
            .await?
    } else {
        state.quotations.list_by_buyer(acting.user_id).await?
    };
    Ok(Json(quotations.into_iter().map(Into::into).collect()))
}

/// Gets a quotation, visible to its buyer and the gatekeeper
pub async fn get_quotation(
    State(state): State<AppState>,
    Extension(acting): Extension<ActingUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<QuotationResponse>, ApiError> {
    let quotation = state.quotations.get(id.into()).await?;
    ensure_party(acting, &quotation)?;
    Ok(Json(quotation.into()))
}

/// Revises a negotiated quotation (gatekeeper)
pub async fn revise_quotation(
    State(state): State<AppState>,
    Extension(acting): Extension<ActingUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<ReviseQuotationRequest>,
) -> Result<Json<QuotationResponse>, ApiError> {
    request.validate()?;
    let quotation = state
        .quotations
        .update_quotation(
            acting,
            id.into(),
            ReviseQuotation {
                unit_price: request.unit_price.into_money(),
                specifications: request.specifications,
                delivery_port: request.delivery_port,
                delivery_date: request.delivery_date,
                payment_terms: request.payment_terms,
            },
        )
        .await?;
    Ok(Json(quotation.into()))
}

/// Buyer requests changes on a quotation
pub async fn negotiate_quotation(
    State(state): State<AppState>,
    Extension(acting): Extension<ActingUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<NegotiateQuotationRequest>,
) -> Result<Json<QuotationResponse>, ApiError> {
    request.validate()?;
    let quotation = state
        .quotations
        .buyer_negotiate(acting, id.into(), request.message)
        .await?;
    Ok(Json(quotation.into()))
}

/// Buyer accepts a quotation
pub async fn accept_quotation(
    State(state): State<AppState>,
    Extension(acting): Extension<ActingUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<QuotationResponse>, ApiError> {
    let quotation = state.quotations.buyer_accept(acting, id.into()).await?;
    Ok(Json(quotation.into()))
}

/// Buyer rejects a quotation
pub async fn reject_quotation(
    State(state): State<AppState>,
    Extension(acting): Extension<ActingUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<QuotationResponse>, ApiError> {
    let quotation = state.quotations.buyer_reject(acting, id.into()).await?;
    Ok(Json(quotation.into()))
}

/// Converts an accepted quotation into an order (gatekeeper)
pub async fn convert_quotation(
    State(state): State<AppState>,
    Extension(acting): Extension<ActingUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<OrderResponse>, ApiError> {
    let order = state.orders.convert_to_dpo(acting, id.into()).await?;
    Ok(Json(order.into()))
}
