//! Sales records (POS receipts and back-office sales).
//!
//! Totals, taxes and stock movements are computed by the backend.

pub mod sale;

pub use sale::{PaymentStatus, Sale, SaleInput, SaleItem, SaleItemInput};
