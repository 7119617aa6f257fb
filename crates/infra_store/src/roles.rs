//! In-memory role store

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use core_kernel::{DomainPort, PartyId, PortError, RoleId};
use domain_access::{Role, RoleAssignment, RoleCode, RoleStore};

/// In-memory implementation of [`RoleStore`]
#[derive(Debug, Default)]
pub struct InMemoryRoleStore {
    roles: Arc<RwLock<HashMap<RoleId, Role>>>,
    assignments: Arc<RwLock<HashMap<PartyId, RoleAssignment>>>,
}

impl InMemoryRoleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populates the store with role records
    pub async fn with_roles(roles: Vec<Role>) -> Self {
        let store = Self::new();
        for role in roles {
            store.roles.write().await.insert(role.id, role);
        }
        store
    }
}

impl DomainPort for InMemoryRoleStore {}

#[async_trait]
impl RoleStore for InMemoryRoleStore {
    async fn get_role(&self, id: RoleId) -> Result<Role, PortError> {
        self.roles
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| PortError::not_found("Role", id))
    }

    async fn find_by_code(&self, code: RoleCode) -> Result<Option<Role>, PortError> {
        Ok(self
            .roles
            .read()
            .await
            .values()
            .find(|role| role.code == code)
            .cloned())
    }

    async fn list_roles(&self) -> Result<Vec<Role>, PortError> {
        let mut roles: Vec<Role> = self.roles.read().await.values().cloned().collect();
        roles.sort_by_key(|role| role.code.as_str());
        Ok(roles)
    }

    async fn insert_role(&self, role: Role) -> Result<(), PortError> {
        let mut roles = self.roles.write().await;
        if roles.contains_key(&role.id) {
            return Err(PortError::conflict(format!("role {} already exists", role.id)));
        }
        roles.insert(role.id, role);
        Ok(())
    }

    async fn update_role(&self, expected_version: u32, mut role: Role) -> Result<Role, PortError> {
        let mut roles = self.roles.write().await;
        let current = roles
            .get(&role.id)
            .ok_or_else(|| PortError::not_found("Role", role.id))?;
        if current.version != expected_version {
            return Err(PortError::conflict(format!(
                "version mismatch on role {}: expected {}, found {}",
                role.id, expected_version, current.version
            )));
        }
        role.version = expected_version + 1;
        roles.insert(role.id, role.clone());
        Ok(role)
    }

    async fn delete_role(&self, id: RoleId) -> Result<(), PortError> {
        self.roles
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| PortError::not_found("Role", id))
    }

    async fn get_assignment(&self, user_id: PartyId) -> Result<Option<RoleAssignment>, PortError> {
        Ok(self.assignments.read().await.get(&user_id).cloned())
    }

    async fn set_assignment(&self, assignment: RoleAssignment) -> Result<(), PortError> {
        self.assignments
            .write()
            .await
            .insert(assignment.user_id, assignment);
        Ok(())
    }
}
