//! `erpdesk-auth`: roles, permissions and the dashboard's permission check.
//!
//! No HTTP here: the permission check only reads what the
//! login flow left in storage.

pub mod access;
pub mod permissions;
pub mod roles;
pub mod session;

pub use access::{AccessDecision, PermissionCheck};
pub use permissions::{Permission, PermissionRecord};
pub use roles::{Role, RoleInput, RoleRecord, SUPER_ROLE};
pub use session::{Session, User};
