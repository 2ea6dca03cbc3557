use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use erpdesk_core::{DomainResult, Entity, RecordId};

/// Which address book a contact belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    Customer,
    Supplier,
    Employee,
    #[default]
    #[serde(other)]
    Other,
}

/// An address-book entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: RecordId,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    #[serde(default)]
    pub kind: ContactKind,
    pub notes: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl Contact {
    /// Case-insensitive match on name, email, phone and company.
    ///
    /// An empty (or all-whitespace) needle matches everything.
    pub fn matches(&self, needle: &str) -> bool {
        let needle = needle.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        core::iter::once(Some(self.name.as_str()))
            .chain([self.email.as_deref(), self.phone.as_deref(), self.company.as_deref()])
            .flatten()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

impl Entity for Contact {
    fn id(&self) -> &RecordId {
        &self.id
    }
}

/// Fields editable from the contact form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInput {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub kind: ContactKind,
    pub notes: Option<String>,
}

impl ContactInput {
    pub fn validate(&self) -> DomainResult<()> {
        crate::validate_party(&self.name, self.email.as_deref())
    }
}
