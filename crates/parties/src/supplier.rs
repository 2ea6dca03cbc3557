use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use erpdesk_core::{DomainResult, Entity, RecordId};

/// A supplier as shown on the suppliers page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub id: RecordId,
    pub name: String,
    pub company_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub tax_number: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Supplier {
    /// Company name when known, otherwise the contact name.
    pub fn display_name(&self) -> &str {
        self.company_name
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .unwrap_or(&self.name)
    }
}

impl Entity for Supplier {
    fn id(&self) -> &RecordId {
        &self.id
    }
}

/// Fields editable from the supplier form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierInput {
    pub name: String,
    pub company_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub tax_number: Option<String>,
}

impl SupplierInput {
    pub fn validate(&self) -> DomainResult<()> {
        crate::validate_party(&self.name, self.email.as_deref())
    }
}
