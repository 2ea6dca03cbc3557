//! `erpdesk-core`: shared building blocks for the dashboard client.
//!
//! Identifiers, the error model, field-name conventions, lenient decoders for
//! backend payloads and the key/value storage abstraction used by the stores.

pub mod de;
pub mod entity;
pub mod error;
pub mod id;
pub mod naming;
pub mod storage;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::RecordId;
pub use storage::{FileStorage, MemoryStorage, Storage, StorageKey};
