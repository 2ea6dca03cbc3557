//! Inventory records: warehouses, stock transfers between them and damaged
//! stock write-offs.
//!
//! Stock levels and the transfer workflow are computed by the backend; the
//! client only renders the records it gets back.

pub mod damaged_stock;
pub mod stock_transfer;
pub mod warehouse;

pub use damaged_stock::{DamagedStock, DamagedStockInput};
pub use stock_transfer::{StockTransfer, StockTransferInput, TransferItem, TransferStatus};
pub use warehouse::{Warehouse, WarehouseInput};
