//! Access domain ports

use async_trait::async_trait;

use core_kernel::{DomainPort, PartyId, PortError, RoleId};

use crate::role::{Role, RoleAssignment, RoleCode};

/// Port for role records and user assignments
///
/// Implementations must enforce the version precondition on `update_role`:
/// a mismatch between `expected_version` and the stored record fails with
/// `PortError::Conflict` without writing.
#[async_trait]
pub trait RoleStore: DomainPort {
    /// Retrieves a role by id
    async fn get_role(&self, id: RoleId) -> Result<Role, PortError>;

    /// Finds the role record carrying a code
    async fn find_by_code(&self, code: RoleCode) -> Result<Option<Role>, PortError>;

    /// Lists all role records
    async fn list_roles(&self) -> Result<Vec<Role>, PortError>;

    /// Inserts a new role record
    async fn insert_role(&self, role: Role) -> Result<(), PortError>;

    /// Replaces a role record, guarded by the version precondition
    async fn update_role(&self, expected_version: u32, role: Role) -> Result<Role, PortError>;

    /// Deletes a role record
    async fn delete_role(&self, id: RoleId) -> Result<(), PortError>;

    /// Returns a user's current assignment, if any
    async fn get_assignment(&self, user_id: PartyId) -> Result<Option<RoleAssignment>, PortError>;

    /// Overwrites a user's assignment (destructive, single-valued)
    async fn set_assignment(&self, assignment: RoleAssignment) -> Result<(), PortError>;
}
