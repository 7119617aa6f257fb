//! Order handlers

use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use serde::Deserialize;
use uuid::Uuid;

use domain_access::ActingUser;
use domain_order::{Order, OrderStatus};

use crate::dto::order::OrderResponse;
use crate::{error::ApiError, AppState};

#[derive(Debug, Deserialize)]
pub struct OrderListQuery {
    pub status: Option<OrderStatus>,
}

fn ensure_party(acting: ActingUser, order: &Order) -> Result<(), ApiError> {
    if !acting.role.is_gatekeeper() && order.buyer_id != acting.user_id {
        return Err(ApiError::Forbidden("not a party to this order".to_string()));
    }
    Ok(())
}

/// Lists orders: the gatekeeper by status, a buyer their own
pub async fn list_orders(
    State(state): State<AppState>,
    Extension(acting): Extension<ActingUser>,
    Query(query): Query<OrderListQuery>,
) -> Result<Json<Vec<OrderResponse>>, ApiError> {
    let orders = if acting.role.is_gatekeeper() {
        state
            .orders
            .list_by_status(query.status.unwrap_or(OrderStatus::Pending))
            .await?
    } else {
        state.orders.list_by_buyer(acting.user_id).await?
    };
    Ok(Json(orders.into_iter().map(Into::into).collect()))
}

/// Gets an order, visible to its buyer and the gatekeeper
pub async fn get_order(
    State(state): State<AppState>,
    Extension(acting): Extension<ActingUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<OrderResponse>, ApiError> {
    let order = state.orders.get(id.into()).await?;
    ensure_party(acting, &order)?;
    Ok(Json(order.into()))
}

/// Confirms a pending order (gatekeeper)
pub async fn confirm_order(
    State(state): State<AppState>,
    Extension(acting): Extension<ActingUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<OrderResponse>, ApiError> {
    let order = state.orders.confirm(acting, id.into()).await?;
    Ok(Json(order.into()))
}

/// Moves a confirmed order into processing (gatekeeper)
pub async fn process_order(
    State(state): State<AppState>,
    Extension(acting): Extension<ActingUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<OrderResponse>, ApiError> {
    let order = state.orders.start_processing(acting, id.into()).await?;
    Ok(Json(order.into()))
}

/// Completes a processing order (gatekeeper)
pub async fn complete_order(
    State(state): State<AppState>,
    Extension(acting): Extension<ActingUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<OrderResponse>, ApiError> {
    let order = state.orders.complete(acting, id.into()).await?;
    Ok(Json(order.into()))
}
