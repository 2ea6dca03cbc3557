use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use erpdesk_core::{DomainError, DomainResult, Entity, RecordId};

use crate::Permission;

/// Name of the role that is granted every permission.
pub const SUPER_ROLE: &str = "super_admin";

/// Role identifier used for RBAC.
///
/// Roles are opaque strings; the backend maps them to permissions and hands
/// the resulting list to the client at login.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(Cow<'static, str>);

impl Role {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn super_role() -> Self {
        Self::new(SUPER_ROLE)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Role names are compared case-insensitively against [`SUPER_ROLE`].
    pub fn is_super(&self) -> bool {
        self.as_str().eq_ignore_ascii_case(SUPER_ROLE)
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A role as managed on the roles page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleRecord {
    pub id: RecordId,
    pub name: Role,
    pub description: Option<String>,
    pub permissions: Vec<Permission>,
}

impl RoleRecord {
    pub fn grants(&self, permission: &Permission) -> bool {
        self.name.is_super()
            || self
                .permissions
                .iter()
                .any(|p| p.is_wildcard() || p == permission)
    }
}

impl Entity for RoleRecord {
    fn id(&self) -> &RecordId {
        &self.id
    }
}

/// Input for creating or updating a role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleInput {
    pub name: String,
    pub description: Option<String>,
    pub permissions: Vec<Permission>,
}

impl RoleInput {
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("role name is required"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn super_role_matches_case_insensitively() {
        assert!(Role::new("Super_Admin").is_super());
        assert!(Role::super_role().is_super());
        assert!(!Role::new("cashier").is_super());
    }

    #[test]
    fn role_record_grants_listed_permissions() {
        let role = RoleRecord {
            id: RecordId::from(1u64),
            name: Role::new("cashier"),
            description: None,
            permissions: vec![Permission::new("sales.create")],
        };
        assert!(role.grants(&Permission::new("sales.create")));
        assert!(!role.grants(&Permission::new("settings.edit")));
    }
}
