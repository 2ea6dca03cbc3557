use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use erpdesk_core::{Entity, RecordId};

/// Permission identifier.
///
/// Permissions are opaque strings (e.g. "customers.view"). The wildcard `"*"`
/// grants everything.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Permission(Cow<'static, str>);

impl Permission {
    pub const WILDCARD: &'static str = "*";

    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_wildcard(&self) -> bool {
        self.as_str() == Self::WILDCARD
    }

    /// The part before the first dot: `customers.view` → `customers`.
    pub fn group(&self) -> &str {
        self.as_str().split('.').next().unwrap_or_default()
    }
}

impl core::fmt::Display for Permission {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for Permission {
    fn from(value: &'static str) -> Self {
        Self::new(value)
    }
}

/// A permission as listed by the backend (`GET /permissions`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionRecord {
    pub id: RecordId,
    pub name: Permission,
    pub group: Option<String>,
}

impl Entity for PermissionRecord {
    fn id(&self) -> &RecordId {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_is_the_resource_prefix() {
        assert_eq!(Permission::new("customers.view").group(), "customers");
        assert_eq!(Permission::new("reports").group(), "reports");
        assert!(Permission::new("*").is_wildcard());
    }
}
