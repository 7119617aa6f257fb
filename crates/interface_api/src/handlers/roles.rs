//! Role administration handlers

use axum::{
    extract::{Path, State},
    Extension, Json,
};
use uuid::Uuid;
use validator::Validate;

use domain_access::ActingUser;

use crate::dto::roles::{
    AssignRoleRequest, DemoteUserRequest, RoleResponse, UpdateRoleRequest,
};
use crate::{error::ApiError, AppState};

fn ensure_gatekeeper(acting: ActingUser) -> Result<(), ApiError> {
    if !acting.role.is_gatekeeper() {
        return Err(ApiError::Forbidden(
            "role administration is gatekeeper-only".to_string(),
        ));
    }
    Ok(())
}

/// Lists all role records (gatekeeper)
pub async fn list_roles(
    State(state): State<AppState>,
    Extension(acting): Extension<ActingUser>,
) -> Result<Json<Vec<RoleResponse>>, ApiError> {
    ensure_gatekeeper(acting)?;
    let roles = state.roles.list_roles().await?;
    Ok(Json(roles.into_iter().map(Into::into).collect()))
}

/// Edits a role's display name and description (gatekeeper); the
/// gatekeeping role itself is immutable
pub async fn update_role(
    State(state): State<AppState>,
    Extension(acting): Extension<ActingUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateRoleRequest>,
) -> Result<Json<RoleResponse>, ApiError> {
    ensure_gatekeeper(acting)?;
    request.validate()?;
    let role = state
        .roles
        .update_role(id.into(), request.display_name, request.description)
        .await?;
    Ok(Json(role.into()))
}

/// Deletes a role record (gatekeeper); never the gatekeeping role
pub async fn delete_role(
    State(state): State<AppState>,
    Extension(acting): Extension<ActingUser>,
    Path(id): Path<Uuid>,
) -> Result<(), ApiError> {
    ensure_gatekeeper(acting)?;
    state.roles.delete_role(id.into()).await?;
    Ok(())
}

/// Assigns a user's single role, overwriting any previous one (gatekeeper)
pub async fn assign_role(
    State(state): State<AppState>,
    Extension(acting): Extension<ActingUser>,
    Json(request): Json<AssignRoleRequest>,
) -> Result<(), ApiError> {
    ensure_gatekeeper(acting)?;
    state
        .roles
        .assign_role(request.user_id.into(), request.role)
        .await?;
    Ok(())
}

/// Explicitly demotes a captain to a different role (gatekeeper)
pub async fn demote_user(
    State(state): State<AppState>,
    Extension(acting): Extension<ActingUser>,
    Path(user_id): Path<Uuid>,
    Json(request): Json<DemoteUserRequest>,
) -> Result<(), ApiError> {
    state
        .roles
        .demote_user(acting, user_id.into(), request.new_role)
        .await?;
    Ok(())
}
