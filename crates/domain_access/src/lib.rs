//! Access Domain - the Role Gate
//!
//! Maps an acting user to a role code and decides whether that role may
//! invoke a given transition on a given document type. Every mutating
//! operation in the lifecycle managers consults the gate before touching
//! state (check-then-act, not compensating rollback).
//!
//! Role assignment is single-valued: a user holds exactly one active role
//! code at a time, and reassignment is a destructive overwrite. The
//! gatekeeping role (the captain) is exempt from the generic role-edit
//! path; captains are only removed through the explicit demote action.

pub mod gate;
pub mod ports;
pub mod role;
pub mod service;

pub use gate::{can_transition, ensure_allowed, DocumentKind, TransitionKind};
pub use ports::RoleStore;
pub use role::{ActingUser, Role, RoleAssignment, RoleCode};
pub use service::RoleService;
