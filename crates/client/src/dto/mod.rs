//! Backend wire shapes and their conversions.
//!
//! `*Wire` types mirror what the backend sends (snake_case, lenient numbers
//! and flags); `*Payload` types mirror what it accepts. The `From` impls are
//! the only place where field names change between the backend's convention
//! and the dashboard records.

pub mod access;
pub mod catalog;
pub mod expenses;
pub mod inventory;
pub mod parties;
pub mod reports;
pub mod sales;
pub mod settings;
