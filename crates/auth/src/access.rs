//! Permission check used by pages and navigation.
//!
//! The check reads the stored role and permission list once. Until then every
//! question is answered with [`AccessDecision::Loading`], which callers treat
//! as "not granted yet" (render a spinner, hide the nav item).

use std::collections::HashSet;

use erpdesk_core::storage::read_json;
use erpdesk_core::{Storage, StorageKey};

use crate::session::User;
use crate::{Permission, Role};

/// Outcome of a single permission question.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    /// Storage has not been read yet.
    Loading,
    Granted,
    Denied,
}

impl AccessDecision {
    pub fn is_granted(self) -> bool {
        self == AccessDecision::Granted
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum AccessState {
    Loading,
    Ready {
        role: Option<Role>,
        permissions: HashSet<String>,
    },
}

/// Role + permission-set lookup.
///
/// - The super-role is granted everything.
/// - A stored `"*"` is granted everything.
/// - Otherwise a permission is granted iff it is in the stored set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionCheck {
    state: AccessState,
}

impl Default for PermissionCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl PermissionCheck {
    /// A check that has not read storage yet.
    pub fn new() -> Self {
        Self {
            state: AccessState::Loading,
        }
    }

    /// A check built from an already-known role and permission list.
    pub fn from_parts<I, P>(role: Option<Role>, permissions: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<str>,
    {
        Self {
            state: AccessState::Ready {
                role,
                permissions: permissions.into_iter().map(|p| p.as_ref().to_string()).collect(),
            },
        }
    }

    /// Read role and permissions from storage, then leave the loading state.
    ///
    /// Missing or malformed entries count as "no role" / "no permissions".
    pub fn load(&mut self, storage: &dyn Storage) -> &mut Self {
        let role = match read_json::<User>(storage, StorageKey::User.as_str()) {
            Ok(user) => user.and_then(|u| u.role),
            Err(e) => {
                tracing::warn!(error = %e, "stored user is unreadable; treating as no role");
                None
            }
        };

        let permissions = match read_json::<Vec<String>>(storage, StorageKey::Permissions.as_str()) {
            Ok(perms) => perms.unwrap_or_default(),
            Err(e) => {
                tracing::warn!(error = %e, "stored permissions are unreadable; treating as empty");
                Vec::new()
            }
        };

        tracing::debug!(
            role = role.as_ref().map(Role::as_str).unwrap_or("-"),
            permissions = permissions.len(),
            "permission check loaded"
        );

        *self = Self::from_parts(role, permissions);
        self
    }

    /// Convenience: `new()` followed by `load()`.
    pub fn loaded(storage: &dyn Storage) -> Self {
        let mut check = Self::new();
        check.load(storage);
        check
    }

    pub fn is_loading(&self) -> bool {
        self.state == AccessState::Loading
    }

    pub fn role(&self) -> Option<&Role> {
        match &self.state {
            AccessState::Ready { role, .. } => role.as_ref(),
            AccessState::Loading => None,
        }
    }

    pub fn is_super(&self) -> bool {
        self.role().is_some_and(Role::is_super)
    }

    pub fn decide(&self, required: &Permission) -> AccessDecision {
        match &self.state {
            AccessState::Loading => AccessDecision::Loading,
            AccessState::Ready { role, permissions } => {
                let granted = role.as_ref().is_some_and(Role::is_super)
                    || permissions.contains(Permission::WILDCARD)
                    || permissions.contains(required.as_str());
                if granted {
                    AccessDecision::Granted
                } else {
                    AccessDecision::Denied
                }
            }
        }
    }

    /// `true` only once loaded and granted.
    pub fn has_permission(&self, required: &str) -> bool {
        self.decide(&Permission::new(required.to_string())).is_granted()
    }

    pub fn has_any(&self, required: &[&str]) -> bool {
        required.iter().any(|p| self.has_permission(p))
    }

    pub fn has_all(&self, required: &[&str]) -> bool {
        required.iter().all(|p| self.has_permission(p))
    }
}
