//! Catalog handlers

use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use domain_access::{ActingUser, RoleCode};
use domain_catalog::{ProductStatus, SubmitProduct};

use crate::dto::catalog::{ProductResponse, SubmitProductRequest};
use crate::{error::ApiError, AppState};

#[derive(Debug, Deserialize)]
pub struct ProductListQuery {
    pub status: Option<ProductStatus>,
}

/// Submits a new product offer (seller)
pub async fn submit_product(
    State(state): State<AppState>,
    Extension(acting): Extension<ActingUser>,
    Json(request): Json<SubmitProductRequest>,
) -> Result<Json<ProductResponse>, ApiError> {
    request.validate()?;
    let product = state
        .catalog
        .submit(
            acting,
            SubmitProduct {
                name: request.name,
                category: request.category,
                unit_price: request.unit_price.into_money(),
                min_order_quantity: request.min_order_quantity,
                available_quantity: request.available_quantity,
                incoterm: request.incoterm,
                relabeling_allowed: request.relabeling_allowed,
                offer_valid_until: request.offer_valid_until,
            },
        )
        .await?;
    Ok(Json(product.into()))
}

/// Lists products: a seller sees their own, everyone else filters by
/// status (approved by default)
pub async fn list_products(
    State(state): State<AppState>,
    Extension(acting): Extension<ActingUser>,
    Query(query): Query<ProductListQuery>,
) -> Result<Json<Vec<ProductResponse>>, ApiError> {
    let products = if acting.role == RoleCode::Seller {
        state.catalog.list_by_seller(acting.user_id).await?
    } else {
        let status = query.status.unwrap_or(ProductStatus::Approved);
        state.catalog.list_by_status(status).await?
    };
    Ok(Json(products.into_iter().map(Into::into).collect()))
}

/// Gets a product by ID
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProductResponse>, ApiError> {
    let product = state.catalog.get(id.into()).await?;
    Ok(Json(product.into()))
}

/// Approves a submitted product (gatekeeper)
pub async fn approve_product(
    State(state): State<AppState>,
    Extension(acting): Extension<ActingUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProductResponse>, ApiError> {
    let product = state.catalog.approve(acting, id.into()).await?;
    Ok(Json(product.into()))
}

/// Rejects a submitted product (gatekeeper)
pub async fn reject_product(
    State(state): State<AppState>,
    Extension(acting): Extension<ActingUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProductResponse>, ApiError> {
    let product = state.catalog.reject(acting, id.into()).await?;
    Ok(Json(product.into()))
}
