use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use erpdesk_core::{DomainResult, Entity, RecordId};

/// A customer as shown on the customers page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: RecordId,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub tax_number: Option<String>,
    pub opening_balance: f64,
    pub customer_group: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Entity for Customer {
    fn id(&self) -> &RecordId {
        &self.id
    }
}

/// Fields editable from the customer form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInput {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub tax_number: Option<String>,
    pub opening_balance: Option<f64>,
    pub customer_group: Option<String>,
}

impl CustomerInput {
    pub fn validate(&self) -> DomainResult<()> {
        crate::validate_party(&self.name, self.email.as_deref())
    }
}

impl From<&Customer> for CustomerInput {
    fn from(c: &Customer) -> Self {
        Self {
            name: c.name.clone(),
            email: c.email.clone(),
            phone: c.phone.clone(),
            address: c.address.clone(),
            city: c.city.clone(),
            country: c.country.clone(),
            tax_number: c.tax_number.clone(),
            opening_balance: Some(c.opening_balance),
            customer_group: c.customer_group.clone(),
        }
    }
}
