//! Service catalog.
//!
//! Every service shares one [`ApiClient`], so the token set by
//! [`AuthService::login`] is used by all of them.

pub mod auth;
pub mod permissions;
pub mod reports;
pub mod resources;
pub mod settings;
mod stock_transfers;

use crate::config::ClientConfig;
use crate::error::ApiResult;
use crate::http::ApiClient;
use crate::resource::ResourceService;

pub use auth::AuthService;
pub use permissions::PermissionService;
pub use reports::ReportService;
pub use resources::{
    Categories, Contacts, Customers, DamagedStocks, Expenses, Products, Roles, Sales, StockTransfers, Suppliers,
    Warehouses,
};
pub use settings::SettingsService;

#[derive(Debug, Clone)]
pub struct Services {
    client: ApiClient,
}

impl Services {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn from_config(config: &ClientConfig) -> ApiResult<Self> {
        Ok(Self::new(ApiClient::new(config)?))
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub fn customers(&self) -> ResourceService<Customers> {
        ResourceService::new(self.client.clone())
    }

    pub fn suppliers(&self) -> ResourceService<Suppliers> {
        ResourceService::new(self.client.clone())
    }

    pub fn contacts(&self) -> ResourceService<Contacts> {
        ResourceService::new(self.client.clone())
    }

    pub fn products(&self) -> ResourceService<Products> {
        ResourceService::new(self.client.clone())
    }

    pub fn categories(&self) -> ResourceService<Categories> {
        ResourceService::new(self.client.clone())
    }

    pub fn warehouses(&self) -> ResourceService<Warehouses> {
        ResourceService::new(self.client.clone())
    }

    pub fn stock_transfers(&self) -> ResourceService<StockTransfers> {
        ResourceService::new(self.client.clone())
    }

    pub fn damaged_stock(&self) -> ResourceService<DamagedStocks> {
        ResourceService::new(self.client.clone())
    }

    pub fn expenses(&self) -> ResourceService<Expenses> {
        ResourceService::new(self.client.clone())
    }

    pub fn sales(&self) -> ResourceService<Sales> {
        ResourceService::new(self.client.clone())
    }

    pub fn roles(&self) -> ResourceService<Roles> {
        ResourceService::new(self.client.clone())
    }

    pub fn permissions(&self) -> PermissionService {
        PermissionService::new(self.client.clone())
    }

    pub fn auth(&self) -> AuthService {
        AuthService::new(self.client.clone())
    }

    pub fn settings(&self) -> SettingsService {
        SettingsService::new(self.client.clone())
    }

    pub fn reports(&self) -> ReportService {
        ReportService::new(self.client.clone())
    }
}
