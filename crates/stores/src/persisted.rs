use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use erpdesk_core::storage::{read_json, write_json};
use erpdesk_core::{DomainResult, Storage, StorageKey};

/// A value bound to one storage key.
///
/// Loading never fails: a missing entry yields the default, a malformed one
/// is logged and also yields the default.
pub struct Persisted<T> {
    storage: Arc<dyn Storage>,
    key: StorageKey,
    value: T,
}

impl<T> core::fmt::Debug for Persisted<T>
where
    T: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Persisted")
            .field("key", &self.key.as_str())
            .field("value", &self.value)
            .finish()
    }
}

impl<T> Persisted<T>
where
    T: Serialize + DeserializeOwned + Default,
{
    pub fn load(storage: Arc<dyn Storage>, key: StorageKey) -> Self {
        let value = match read_json::<T>(storage.as_ref(), key.as_str()) {
            Ok(Some(value)) => value,
            Ok(None) => T::default(),
            Err(e) => {
                tracing::warn!(key = key.as_str(), error = %e, "persisted state unreadable; using defaults");
                T::default()
            }
        };
        Self { storage, key, value }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn key(&self) -> StorageKey {
        self.key
    }

    pub fn save(&self) -> DomainResult<()> {
        write_json(self.storage.as_ref(), self.key.as_str(), &self.value)
    }

    /// Replace the value and write it through.
    pub fn set(&mut self, value: T) -> DomainResult<()> {
        self.value = value;
        self.save()
    }

    /// Mutate in place, then write through.
    pub fn update<F>(&mut self, f: F) -> DomainResult<()>
    where
        F: FnOnce(&mut T),
    {
        f(&mut self.value);
        self.save()
    }

    /// Back to the default; the storage entry is removed.
    pub fn reset(&mut self) -> DomainResult<()> {
        self.value = T::default();
        self.storage.remove(self.key.as_str())
    }
}
