use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use erpdesk_core::{DomainError, DomainResult, Entity, RecordId};

/// A damaged-stock write-off.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DamagedStock {
    pub id: RecordId,
    pub product_id: RecordId,
    pub product_name: Option<String>,
    pub warehouse_id: RecordId,
    pub quantity: f64,
    pub reason: Option<String>,
    pub reported_at: Option<NaiveDate>,
    pub notes: Option<String>,
}

impl Entity for DamagedStock {
    fn id(&self) -> &RecordId {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DamagedStockInput {
    pub product_id: RecordId,
    pub warehouse_id: RecordId,
    pub quantity: f64,
    pub reason: Option<String>,
    pub reported_at: Option<NaiveDate>,
    pub notes: Option<String>,
}

impl DamagedStockInput {
    pub fn validate(&self) -> DomainResult<()> {
        if !(self.quantity > 0.0) {
            return Err(DomainError::validation("damaged quantity must be positive"));
        }
        Ok(())
    }
}
