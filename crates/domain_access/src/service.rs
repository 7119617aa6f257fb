//! Role administration
//!
//! The generic edit/delete/reassign path refuses to touch the gatekeeping
//! role. Removing a captain requires the explicit demote action, which
//! reassigns a different role in one step.

use std::sync::Arc;

use tracing::{info, warn};

use core_kernel::{PartyId, RoleId, TradeError};

use crate::ports::RoleStore;
use crate::role::{ActingUser, Role, RoleAssignment, RoleCode};

/// Service for role records and user assignments
pub struct RoleService {
    roles: Arc<dyn RoleStore>,
}

impl RoleService {
    pub fn new(roles: Arc<dyn RoleStore>) -> Self {
        Self { roles }
    }

    /// Lists all role records
    pub async fn list_roles(&self) -> Result<Vec<Role>, TradeError> {
        Ok(self.roles.list_roles().await?)
    }

    /// Looks up a user's active role code
    pub async fn user_role(&self, user_id: PartyId) -> Result<Option<RoleCode>, TradeError> {
        Ok(self
            .roles
            .get_assignment(user_id)
            .await?
            .map(|assignment| assignment.role))
    }

    /// Updates a role's display name and description.
    ///
    /// The gatekeeping role is immutable through this path.
    pub async fn update_role(
        &self,
        id: RoleId,
        display_name: String,
        description: String,
    ) -> Result<Role, TradeError> {
        let mut role = self
            .roles
            .get_role(id)
            .await
            .map_err(|_| TradeError::not_found("role", id))?;

        if role.code.is_gatekeeper() {
            warn!(role = %role.code, "rejected edit of gatekeeping role");
            return Err(TradeError::forbidden(
                "the gatekeeping role cannot be edited",
            ));
        }

        let expected = role.version;
        role.display_name = display_name;
        role.description = description;
        role.updated_at = chrono::Utc::now();

        Ok(self.roles.update_role(expected, role).await?)
    }

    /// Deletes a role record.
    ///
    /// The gatekeeping role can never be deleted.
    pub async fn delete_role(&self, id: RoleId) -> Result<(), TradeError> {
        let role = self
            .roles
            .get_role(id)
            .await
            .map_err(|_| TradeError::not_found("role", id))?;

        if role.code.is_gatekeeper() {
            warn!(role = %role.code, "rejected deletion of gatekeeping role");
            return Err(TradeError::forbidden(
                "the gatekeeping role cannot be deleted",
            ));
        }

        self.roles.delete_role(id).await?;
        info!(role = %role.code, "role deleted");
        Ok(())
    }

    /// Assigns a role to a user, overwriting any previous assignment.
    ///
    /// A user currently holding the gatekeeping role cannot be reassigned
    /// through this path; use [`RoleService::demote_user`].
    pub async fn assign_role(&self, user_id: PartyId, role: RoleCode) -> Result<(), TradeError> {
        if let Some(current) = self.roles.get_assignment(user_id).await? {
            if current.role.is_gatekeeper() {
                return Err(TradeError::forbidden(
                    "gatekeeper membership is only revoked through the demote action",
                ));
            }
        }

        self.roles
            .set_assignment(RoleAssignment::new(user_id, role))
            .await?;
        info!(user = %user_id, role = %role, "role assigned");
        Ok(())
    }

    /// Explicitly demotes a gatekeeper to a different role.
    ///
    /// Only an acting gatekeeper may demote, and the replacement role must
    /// not itself be the gatekeeping role.
    pub async fn demote_user(
        &self,
        acting: ActingUser,
        user_id: PartyId,
        new_role: RoleCode,
    ) -> Result<(), TradeError> {
        if !acting.role.is_gatekeeper() {
            return Err(TradeError::forbidden("only a captain may demote"));
        }
        if new_role.is_gatekeeper() {
            return Err(TradeError::validation(
                "demotion must assign a non-gatekeeping role",
            ));
        }

        let current = self
            .roles
            .get_assignment(user_id)
            .await?
            .ok_or_else(|| TradeError::not_found("role assignment", user_id))?;

        if !current.role.is_gatekeeper() {
            return Err(TradeError::validation(
                "demote only applies to users holding the gatekeeping role",
            ));
        }

        self.roles
            .set_assignment(RoleAssignment::new(user_id, new_role))
            .await?;
        info!(user = %user_id, from = %current.role, to = %new_role, "captain demoted");
        Ok(())
    }
}
