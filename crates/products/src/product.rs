use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use erpdesk_core::{DomainError, DomainResult, Entity, RecordId};

/// A product as listed on the products page and the POS grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: RecordId,
    pub name: String,
    pub sku: String,
    pub barcode: Option<String>,
    pub category_id: Option<RecordId>,
    pub unit: Option<String>,
    pub cost_price: f64,
    pub selling_price: f64,
    pub stock_quantity: f64,
    pub alert_quantity: Option<f64>,
    pub is_active: bool,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl Product {
    /// Stock at or below the alert level. Products without an alert level
    /// are never low.
    pub fn is_low_stock(&self) -> bool {
        self.alert_quantity
            .is_some_and(|alert| self.stock_quantity <= alert)
    }

    /// Per-unit margin as shown in the product table (`selling - cost`).
    pub fn unit_margin(&self) -> f64 {
        self.selling_price - self.cost_price
    }
}

impl Entity for Product {
    fn id(&self) -> &RecordId {
        &self.id
    }
}

/// Fields editable from the product form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    pub name: String,
    pub sku: String,
    pub barcode: Option<String>,
    pub category_id: Option<RecordId>,
    pub unit: Option<String>,
    pub cost_price: f64,
    pub selling_price: f64,
    pub alert_quantity: Option<f64>,
    pub is_active: bool,
    pub description: Option<String>,
}

impl ProductInput {
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("product name is required"));
        }
        if self.sku.trim().is_empty() {
            return Err(DomainError::validation("sku is required"));
        }
        if !(self.cost_price >= 0.0 && self.selling_price >= 0.0) {
            return Err(DomainError::validation("prices must not be negative"));
        }
        Ok(())
    }
}
