use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use erpdesk_core::{DomainError, DomainResult, Entity, RecordId};

/// Transfer status as reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferStatus {
    Pending,
    InTransit,
    Completed,
    Cancelled,
}

impl TransferStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransferStatus::Pending => "pending",
            TransferStatus::InTransit => "in_transit",
            TransferStatus::Completed => "completed",
            TransferStatus::Cancelled => "cancelled",
        }
    }

    /// Label for the status badge.
    pub fn label(&self) -> &'static str {
        match self {
            TransferStatus::Pending => "Pending",
            TransferStatus::InTransit => "In transit",
            TransferStatus::Completed => "Completed",
            TransferStatus::Cancelled => "Cancelled",
        }
    }

    /// Completed and cancelled transfers are read-only in the UI.
    pub fn is_final(&self) -> bool {
        matches!(self, TransferStatus::Completed | TransferStatus::Cancelled)
    }
}

impl core::fmt::Display for TransferStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferItem {
    pub product_id: RecordId,
    pub product_name: Option<String>,
    pub quantity: f64,
}

/// Movement of stock from one warehouse to another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockTransfer {
    pub id: RecordId,
    pub reference_no: String,
    pub from_warehouse_id: RecordId,
    pub to_warehouse_id: RecordId,
    pub transfer_date: Option<NaiveDate>,
    pub status: TransferStatus,
    pub items: Vec<TransferItem>,
    pub notes: Option<String>,
}

impl StockTransfer {
    pub fn total_quantity(&self) -> f64 {
        self.items.iter().map(|i| i.quantity).sum()
    }
}

impl Entity for StockTransfer {
    fn id(&self) -> &RecordId {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockTransferInput {
    pub reference_no: Option<String>,
    pub from_warehouse_id: RecordId,
    pub to_warehouse_id: RecordId,
    pub transfer_date: Option<NaiveDate>,
    pub items: Vec<TransferItem>,
    pub notes: Option<String>,
}

impl StockTransferInput {
    /// Form-level checks only; availability is checked by the backend.
    pub fn validate(&self) -> DomainResult<()> {
        if self.from_warehouse_id == self.to_warehouse_id {
            return Err(DomainError::validation("source and destination warehouse must differ"));
        }
        if self.items.is_empty() {
            return Err(DomainError::validation("a transfer needs at least one item"));
        }
        if self.items.iter().any(|i| !(i.quantity > 0.0)) {
            return Err(DomainError::validation("transfer quantities must be positive"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(from: u64, to: u64, qty: f64) -> StockTransferInput {
        StockTransferInput {
            reference_no: None,
            from_warehouse_id: RecordId::from(from),
            to_warehouse_id: RecordId::from(to),
            transfer_date: None,
            items: vec![TransferItem {
                product_id: RecordId::from(7u64),
                product_name: None,
                quantity: qty,
            }],
            notes: None,
        }
    }

    #[test]
    fn validate_rejects_same_warehouse_and_bad_quantities() {
        assert!(input(1, 1, 2.0).validate().is_err());
        assert!(input(1, 2, 0.0).validate().is_err());
        assert!(input(1, 2, f64::NAN).validate().is_err());
        assert!(input(1, 2, 2.0).validate().is_ok());

        let mut empty = input(1, 2, 1.0);
        empty.items.clear();
        assert!(empty.validate().is_err());
    }

    #[test]
    fn status_uses_snake_case_on_the_wire() {
        assert_eq!(serde_json::to_string(&TransferStatus::InTransit).unwrap(), "\"in_transit\"");
        let parsed: TransferStatus = serde_json::from_str("\"completed\"").unwrap();
        assert!(parsed.is_final());
        assert!(!TransferStatus::Pending.is_final());
    }
}
