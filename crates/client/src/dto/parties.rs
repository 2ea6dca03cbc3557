use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use erpdesk_core::{RecordId, de};
use erpdesk_parties::{Contact, ContactInput, ContactKind, Customer, CustomerInput, Supplier, SupplierInput};

#[derive(Debug, Clone, Deserialize)]
pub struct CustomerWire {
    pub id: RecordId,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub tax_number: Option<String>,
    tax_no: Option<String>,
    vat_number: Option<String>,
    #[serde(default, deserialize_with = "de::decimal_or_zero")]
    pub opening_balance: f64,
    pub customer_group: Option<String>,
    group: Option<String>,
    #[serde(default, deserialize_with = "de::opt_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "de::opt_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<CustomerWire> for Customer {
    fn from(w: CustomerWire) -> Self {
        Self {
            id: w.id,
            name: w.name,
            email: w.email,
            phone: w.phone,
            address: w.address,
            city: w.city,
            country: w.country,
            tax_number: w.tax_number.or(w.tax_no).or(w.vat_number),
            opening_balance: w.opening_balance,
            customer_group: w.customer_group.or(w.group),
            created_at: w.created_at,
            updated_at: w.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CustomerPayload {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub tax_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opening_balance: Option<f64>,
    pub customer_group: Option<String>,
}

impl From<&CustomerInput> for CustomerPayload {
    fn from(i: &CustomerInput) -> Self {
        Self {
            name: i.name.trim().to_string(),
            email: i.email.clone(),
            phone: i.phone.clone(),
            address: i.address.clone(),
            city: i.city.clone(),
            country: i.country.clone(),
            tax_number: i.tax_number.clone(),
            opening_balance: i.opening_balance,
            customer_group: i.customer_group.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SupplierWire {
    pub id: RecordId,
    pub name: String,
    pub company_name: Option<String>,
    company: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub tax_number: Option<String>,
    tax_no: Option<String>,
    vat_number: Option<String>,
    #[serde(default, deserialize_with = "de::opt_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "de::opt_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<SupplierWire> for Supplier {
    fn from(w: SupplierWire) -> Self {
        Self {
            id: w.id,
            name: w.name,
            company_name: w.company_name.or(w.company),
            email: w.email,
            phone: w.phone,
            address: w.address,
            city: w.city,
            country: w.country,
            tax_number: w.tax_number.or(w.tax_no).or(w.vat_number),
            created_at: w.created_at,
            updated_at: w.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SupplierPayload {
    pub name: String,
    pub company_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub tax_number: Option<String>,
}

impl From<&SupplierInput> for SupplierPayload {
    fn from(i: &SupplierInput) -> Self {
        Self {
            name: i.name.trim().to_string(),
            company_name: i.company_name.clone(),
            email: i.email.clone(),
            phone: i.phone.clone(),
            address: i.address.clone(),
            city: i.city.clone(),
            country: i.country.clone(),
            tax_number: i.tax_number.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContactWire {
    pub id: RecordId,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    company_name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<ContactKind>,
    contact_type: Option<ContactKind>,
    pub notes: Option<String>,
    note: Option<String>,
    #[serde(default, deserialize_with = "de::opt_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<ContactWire> for Contact {
    fn from(w: ContactWire) -> Self {
        Self {
            id: w.id,
            name: w.name,
            email: w.email,
            phone: w.phone,
            company: w.company.or(w.company_name),
            kind: w.kind.or(w.contact_type).unwrap_or_default(),
            notes: w.notes.or(w.note),
            created_at: w.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    #[serde(rename = "type")]
    pub kind: ContactKind,
    pub notes: Option<String>,
}

impl From<&ContactInput> for ContactPayload {
    fn from(i: &ContactInput) -> Self {
        Self {
            name: i.name.trim().to_string(),
            email: i.email.clone(),
            phone: i.phone.clone(),
            company: i.company.clone(),
            kind: i.kind,
            notes: i.notes.clone(),
        }
    }
}
