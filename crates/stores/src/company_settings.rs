use std::sync::Arc;

use erpdesk_client::services::SettingsService;
use erpdesk_client::{ApiResult, CompanySettings};
use erpdesk_core::{DomainResult, Storage, StorageKey};

use crate::persisted::Persisted;

/// Company display settings, persisted under `company-settings`.
#[derive(Debug)]
pub struct CompanySettingsStore {
    state: Persisted<CompanySettings>,
}

impl CompanySettingsStore {
    pub fn load(storage: Arc<dyn Storage>) -> Self {
        Self {
            state: Persisted::load(storage, StorageKey::CompanySettings),
        }
    }

    pub fn settings(&self) -> &CompanySettings {
        self.state.get()
    }

    pub fn set(&mut self, settings: CompanySettings) -> DomainResult<()> {
        self.state.set(settings)
    }

    /// Change some fields, keep the rest.
    pub fn patch<F>(&mut self, f: F) -> DomainResult<()>
    where
        F: FnOnce(&mut CompanySettings),
    {
        self.state.update(f)
    }

    pub fn reset(&mut self) -> DomainResult<()> {
        self.state.reset()
    }

    /// Replace the local copy with the backend's.
    pub async fn refresh(&mut self, service: &SettingsService) -> ApiResult<()> {
        let settings = service.get().await?;
        self.set(settings)?;
        Ok(())
    }

    /// `1234.5` → `"$1234.50"`, using the configured currency symbol.
    pub fn format_amount(&self, amount: f64) -> String {
        let symbol = &self.settings().currency_symbol;
        if amount < 0.0 {
            format!("-{symbol}{:.2}", -amount)
        } else {
            format!("{symbol}{amount:.2}")
        }
    }
}
