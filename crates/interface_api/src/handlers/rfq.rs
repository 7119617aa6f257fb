//! RFQ handlers

use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use domain_access::ActingUser;
use domain_quotation::AcceptRfq;
use domain_rfq::{CreateRfq, RespondAction, RfqService, RfqStatus};

use crate::dto::quotation::AcceptRfqResponse;
use crate::dto::rfq::{
    AcceptRfqRequest, CreateRfqRequest, RespondToRfqRequest, RespondToRfqResponse, RfqResponse,
};
use crate::{error::ApiError, AppState};

#[derive(Debug, Deserialize)]
pub struct RfqListQuery {
    pub status: Option<RfqStatus>,
}

/// Creates an RFQ (buyer)
pub async fn create_rfq(
    State(state): State<AppState>,
    Extension(acting): Extension<ActingUser>,
    Json(request): Json<CreateRfqRequest>,
) -> Result<Json<RfqResponse>, ApiError> {
    request.validate()?;
    let rfq = state
        .rfqs
        .create(
            acting,
            CreateRfq {
                product_id: request.product_id.into(),
                quantity: request.quantity,
                description: request.description,
                budget_min: request.budget_min.map(|m| m.into_money()),
                budget_max: request.budget_max.map(|m| m.into_money()),
                response_deadline: request.response_deadline,
            },
        )
        .await?;
    Ok(Json(rfq.into()))
}

/// Lists RFQs: the gatekeeper sees any status, a buyer sees their own
pub async fn list_rfqs(
    State(state): State<AppState>,
    Extension(acting): Extension<ActingUser>,
    Query(query): Query<RfqListQuery>,
) -> Result<Json<Vec<RfqResponse>>, ApiError> {
    let rfqs = if acting.role.is_gatekeeper() {
        state
            .rfqs
            .list_by_status(query.status.unwrap_or(RfqStatus::Open))
            .await?
    } else {
        state.rfqs.list_by_buyer(acting.user_id).await?
    };
    Ok(Json(rfqs.into_iter().map(Into::into).collect()))
}

/// Gets an RFQ, visible to its buyer and the gatekeeper
pub async fn get_rfq(
    State(state): State<AppState>,
    Extension(acting): Extension<ActingUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<RfqResponse>, ApiError> {
    let rfq = state.rfqs.get(id.into()).await?;
    if !RfqService::may_view(acting, &rfq) {
        return Err(ApiError::Forbidden("not a party to this RFQ".to_string()));
    }
    Ok(Json(rfq.into()))
}

/// Records a gatekeeper response on an RFQ. An `accept` response issues
/// the quotation in the same call and returns it alongside the RFQ.
pub async fn respond_to_rfq(
    State(state): State<AppState>,
    Extension(acting): Extension<ActingUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<RespondToRfqRequest>,
) -> Result<Json<RespondToRfqResponse>, ApiError> {
    if request.action == RespondAction::Accept {
        let (final_price, specifications, payment_terms) = match (
            request.final_price,
            request.specifications,
            request.payment_terms,
        ) {
            (Some(price), Some(specs), Some(terms)) => (price, specs, terms),
            _ => {
                return Err(ApiError::Validation(
                    "accepting an RFQ requires final_price, specifications, and payment_terms"
                        .to_string(),
                ))
            }
        };
        let (rfq, quotation) = state
            .quotations
            .accept_rfq_and_create_dpq(
                acting,
                AcceptRfq {
                    rfq_id: id.into(),
                    final_price: final_price.into_money(),
                    specifications,
                    delivery_port: request.delivery_port,
                    delivery_date: request.delivery_date,
                    payment_terms,
                    message: request.message,
                },
            )
            .await?;
        return Ok(Json(RespondToRfqResponse {
            rfq: rfq.into(),
            quotation: Some(quotation.into()),
        }));
    }

    let rfq = state
        .rfqs
        .respond(acting, id.into(), request.action, request.message)
        .await?;
    Ok(Json(RespondToRfqResponse {
        rfq: rfq.into(),
        quotation: None,
    }))
}

/// Accepts an RFQ, issuing its quotation (gatekeeper)
pub async fn accept_rfq(
    State(state): State<AppState>,
    Extension(acting): Extension<ActingUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<AcceptRfqRequest>,
) -> Result<Json<AcceptRfqResponse>, ApiError> {
    request.validate()?;
    let (rfq, quotation) = state
        .quotations
        .accept_rfq_and_create_dpq(
            acting,
            AcceptRfq {
                rfq_id: id.into(),
                final_price: request.final_price.into_money(),
                specifications: request.specifications,
                delivery_port: request.delivery_port,
                delivery_date: request.delivery_date,
                payment_terms: request.payment_terms,
                message: request.message,
            },
        )
        .await?;
    Ok(Json(AcceptRfqResponse {
        rfq: rfq.into(),
        quotation: quotation.into(),
    }))
}
