use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use erpdesk_core::{RecordId, de};
use erpdesk_inventory::{
    DamagedStock, DamagedStockInput, StockTransfer, StockTransferInput, TransferItem, TransferStatus, Warehouse,
    WarehouseInput,
};

#[derive(Debug, Clone, Deserialize)]
pub struct WarehouseWire {
    pub id: RecordId,
    pub name: String,
    pub code: Option<String>,
    pub address: Option<String>,
    location: Option<String>,
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "de::flag")]
    pub is_default: bool,
}

impl From<WarehouseWire> for Warehouse {
    fn from(w: WarehouseWire) -> Self {
        Self {
            id: w.id,
            name: w.name,
            code: w.code,
            address: w.address.or(w.location),
            phone: w.phone,
            is_default: w.is_default,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct WarehousePayload {
    pub name: String,
    pub code: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub is_default: bool,
}

impl From<&WarehouseInput> for WarehousePayload {
    fn from(i: &WarehouseInput) -> Self {
        Self {
            name: i.name.trim().to_string(),
            code: i.code.clone(),
            address: i.address.clone(),
            phone: i.phone.clone(),
            is_default: i.is_default,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProductRef {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TransferItemWire {
    pub product_id: RecordId,
    pub product_name: Option<String>,
    pub product: Option<ProductRef>,
    #[serde(deserialize_with = "de::decimal")]
    pub quantity: f64,
}

impl From<TransferItemWire> for TransferItem {
    fn from(w: TransferItemWire) -> Self {
        Self {
            product_id: w.product_id,
            product_name: w.product_name.or(w.product.and_then(|p| p.name)),
            quantity: w.quantity,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StockTransferWire {
    pub id: RecordId,
    pub reference_no: Option<String>,
    reference: Option<String>,
    reference_number: Option<String>,
    pub from_warehouse_id: RecordId,
    pub to_warehouse_id: RecordId,
    #[serde(default, deserialize_with = "de::opt_date")]
    pub transfer_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "de::opt_date")]
    date: Option<NaiveDate>,
    pub status: TransferStatus,
    #[serde(default)]
    pub items: Vec<TransferItemWire>,
    pub notes: Option<String>,
    note: Option<String>,
}

impl From<StockTransferWire> for StockTransfer {
    fn from(w: StockTransferWire) -> Self {
        Self {
            reference_no: w
                .reference_no
                .or(w.reference)
                .or(w.reference_number)
                .unwrap_or_else(|| format!("TRF-{}", w.id)),
            id: w.id,
            from_warehouse_id: w.from_warehouse_id,
            to_warehouse_id: w.to_warehouse_id,
            transfer_date: w.transfer_date.or(w.date),
            status: w.status,
            items: w.items.into_iter().map(Into::into).collect(),
            notes: w.notes.or(w.note),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TransferItemPayload {
    pub product_id: RecordId,
    pub quantity: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct StockTransferPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_no: Option<String>,
    pub from_warehouse_id: RecordId,
    pub to_warehouse_id: RecordId,
    pub transfer_date: Option<NaiveDate>,
    pub items: Vec<TransferItemPayload>,
    pub notes: Option<String>,
}

impl From<&StockTransferInput> for StockTransferPayload {
    fn from(i: &StockTransferInput) -> Self {
        Self {
            reference_no: i.reference_no.clone(),
            from_warehouse_id: i.from_warehouse_id.clone(),
            to_warehouse_id: i.to_warehouse_id.clone(),
            transfer_date: i.transfer_date,
            items: i
                .items
                .iter()
                .map(|item| TransferItemPayload {
                    product_id: item.product_id.clone(),
                    quantity: item.quantity,
                })
                .collect(),
            notes: i.notes.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TransferStatusPayload {
    pub status: TransferStatus,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DamagedStockWire {
    pub id: RecordId,
    pub product_id: RecordId,
    pub product_name: Option<String>,
    pub product: Option<ProductRef>,
    pub warehouse_id: RecordId,
    #[serde(deserialize_with = "de::decimal")]
    pub quantity: f64,
    pub reason: Option<String>,
    #[serde(default, deserialize_with = "de::opt_date")]
    pub reported_at: Option<NaiveDate>,
    #[serde(default, deserialize_with = "de::opt_date")]
    date: Option<NaiveDate>,
    pub notes: Option<String>,
    note: Option<String>,
}

impl From<DamagedStockWire> for DamagedStock {
    fn from(w: DamagedStockWire) -> Self {
        Self {
            id: w.id,
            product_id: w.product_id,
            product_name: w.product_name.or(w.product.and_then(|p| p.name)),
            warehouse_id: w.warehouse_id,
            quantity: w.quantity,
            reason: w.reason,
            reported_at: w.reported_at.or(w.date),
            notes: w.notes.or(w.note),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DamagedStockPayload {
    pub product_id: RecordId,
    pub warehouse_id: RecordId,
    pub quantity: f64,
    pub reason: Option<String>,
    #[serde(rename = "date")]
    pub reported_at: Option<NaiveDate>,
    pub notes: Option<String>,
}

impl From<&DamagedStockInput> for DamagedStockPayload {
    fn from(i: &DamagedStockInput) -> Self {
        Self {
            product_id: i.product_id.clone(),
            warehouse_id: i.warehouse_id.clone(),
            quantity: i.quantity,
            reason: i.reason.clone(),
            reported_at: i.reported_at,
            notes: i.notes.clone(),
        }
    }
}
