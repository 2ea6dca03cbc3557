//! Parties: customers, suppliers and the contact book.
//!
//! Plain records in dashboard shape (camelCase when serialized). Lifecycle is
//! owned by the backend; these types only carry what the pages display.

pub mod contact;
pub mod customer;
pub mod supplier;

pub use contact::{Contact, ContactInput, ContactKind};
pub use customer::{Customer, CustomerInput};
pub use supplier::{Supplier, SupplierInput};

use erpdesk_core::{DomainError, DomainResult};

/// Shared checks for party inputs: a name is required, an email (if any)
/// must look like one.
pub(crate) fn validate_party(name: &str, email: Option<&str>) -> DomainResult<()> {
    if name.trim().is_empty() {
        return Err(DomainError::validation("name is required"));
    }
    if let Some(email) = email {
        let email = email.trim();
        let looks_valid = email
            .split_once('@')
            .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
        if !email.is_empty() && !looks_valid {
            return Err(DomainError::validation(format!("invalid email: {email}")));
        }
    }
    Ok(())
}
