//! Role administration DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use domain_access::{Role, RoleCode};

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateRoleRequest {
    #[validate(length(min = 1, max = 100))]
    pub display_name: String,
    #[validate(length(max = 500))]
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct AssignRoleRequest {
    pub user_id: Uuid,
    pub role: RoleCode,
}

#[derive(Debug, Deserialize)]
pub struct DemoteUserRequest {
    pub new_role: RoleCode,
}

#[derive(Debug, Serialize)]
pub struct RoleResponse {
    pub id: Uuid,
    pub code: RoleCode,
    pub display_name: String,
    pub description: String,
    pub version: u32,
    pub created_at: DateTime<Utc>,
}

impl From<Role> for RoleResponse {
    fn from(role: Role) -> Self {
        Self {
            id: role.id.into(),
            code: role.code,
            display_name: role.display_name,
            description: role.description,
            version: role.version,
            created_at: role.created_at,
        }
    }
}
