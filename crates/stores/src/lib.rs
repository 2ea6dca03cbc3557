//! `erpdesk-stores`: client-side state containers.
//!
//! Stores hold what the pages display between requests. They are
//! single-owner (`&mut self`); the persisted ones write through to a shared
//! [`Storage`](erpdesk_core::Storage) on every mutation.

pub mod auth_store;
pub mod company_settings;
pub mod contacts;
pub mod persisted;
pub mod ui_settings;

pub use auth_store::AuthStore;
pub use company_settings::CompanySettingsStore;
pub use contacts::ContactStore;
pub use persisted::Persisted;
pub use ui_settings::{Theme, UiSettings, UiSettingsStore};
