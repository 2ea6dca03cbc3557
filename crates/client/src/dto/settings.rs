use serde::{Deserialize, Serialize};

use erpdesk_core::de;

/// Company display settings as the dashboard uses them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompanySettings {
    pub company_name: String,
    pub currency_code: String,
    pub currency_symbol: String,
    pub tax_rate: f64,
    pub logo_url: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub timezone: String,
    pub date_format: String,
    pub invoice_prefix: String,
}

impl Default for CompanySettings {
    fn default() -> Self {
        Self {
            company_name: "My Company".to_string(),
            currency_code: "USD".to_string(),
            currency_symbol: "$".to_string(),
            tax_rate: 0.0,
            logo_url: None,
            address: None,
            phone: None,
            email: None,
            timezone: "UTC".to_string(),
            date_format: "YYYY-MM-DD".to_string(),
            invoice_prefix: "INV-".to_string(),
        }
    }
}

/// Backend settings document. Older installs use the short column names
/// (`name`, `currency`, `tax`, `logo`); when both are sent the long one wins.
#[derive(Debug, Clone, Deserialize)]
pub struct CompanySettingsWire {
    pub company_name: Option<String>,
    name: Option<String>,
    pub currency_code: Option<String>,
    currency: Option<String>,
    pub currency_symbol: Option<String>,
    #[serde(default, deserialize_with = "de::opt_decimal")]
    pub tax_rate: Option<f64>,
    #[serde(default, deserialize_with = "de::opt_decimal")]
    tax: Option<f64>,
    pub logo_url: Option<String>,
    logo: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub timezone: Option<String>,
    pub date_format: Option<String>,
    pub invoice_prefix: Option<String>,
}

impl CompanySettingsWire {
    /// Field names a settings document is recognised by.
    pub const KEYS: &'static [&'static str] = &[
        "company_name",
        "name",
        "currency_code",
        "currency",
        "currency_symbol",
        "tax_rate",
        "tax",
        "logo_url",
        "logo",
        "address",
        "phone",
        "email",
        "timezone",
        "date_format",
        "invoice_prefix",
    ];
}

impl From<CompanySettingsWire> for CompanySettings {
    /// Fields the backend leaves out keep their defaults.
    fn from(w: CompanySettingsWire) -> Self {
        let d = CompanySettings::default();
        Self {
            company_name: w.company_name.or(w.name).unwrap_or(d.company_name),
            currency_code: w.currency_code.or(w.currency).unwrap_or(d.currency_code),
            currency_symbol: w.currency_symbol.unwrap_or(d.currency_symbol),
            tax_rate: w.tax_rate.or(w.tax).unwrap_or(d.tax_rate),
            logo_url: w.logo_url.or(w.logo),
            address: w.address,
            phone: w.phone,
            email: w.email,
            timezone: w.timezone.unwrap_or(d.timezone),
            date_format: w.date_format.unwrap_or(d.date_format),
            invoice_prefix: w.invoice_prefix.unwrap_or(d.invoice_prefix),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CompanySettingsPayload {
    pub company_name: String,
    pub currency_code: String,
    pub currency_symbol: String,
    pub tax_rate: f64,
    pub logo_url: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub timezone: String,
    pub date_format: String,
    pub invoice_prefix: String,
}

impl From<&CompanySettings> for CompanySettingsPayload {
    fn from(s: &CompanySettings) -> Self {
        Self {
            company_name: s.company_name.trim().to_string(),
            currency_code: s.currency_code.clone(),
            currency_symbol: s.currency_symbol.clone(),
            tax_rate: s.tax_rate,
            logo_url: s.logo_url.clone(),
            address: s.address.clone(),
            phone: s.phone.clone(),
            email: s.email.clone(),
            timezone: s.timezone.clone(),
            date_format: s.date_format.clone(),
            invoice_prefix: s.invoice_prefix.clone(),
        }
    }
}
