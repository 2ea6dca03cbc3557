use crate::dto::settings::{CompanySettings, CompanySettingsPayload, CompanySettingsWire};
use crate::envelope::{Envelope, expect_any_key};
use crate::error::{ApiError, ApiResult};
use crate::http::ApiClient;

/// Company settings: a single document, read and replaced as a whole.
#[derive(Debug, Clone)]
pub struct SettingsService {
    client: ApiClient,
}

impl SettingsService {
    pub const PATH: &'static str = "/settings";

    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn get(&self) -> ApiResult<CompanySettings> {
        let env: Envelope<serde_json::Value> = self.client.get(Self::PATH).await?;
        decode(env.into_inner())
    }

    /// Sends the whole document. The reply must carry the stored settings; a
    /// bare acknowledgement (`{"message": "Settings updated"}`) is a decode
    /// error, never a default document.
    pub async fn update(&self, settings: &CompanySettings) -> ApiResult<CompanySettings> {
        let payload = CompanySettingsPayload::from(settings);
        let env: Envelope<serde_json::Value> = self.client.put(Self::PATH, &payload).await?;
        let stored = decode(env.into_inner())?;
        tracing::info!("company settings updated");
        Ok(stored)
    }
}

fn decode(value: serde_json::Value) -> ApiResult<CompanySettings> {
    expect_any_key(&value, CompanySettingsWire::KEYS, "settings").map_err(ApiError::Decode)?;
    let wire: CompanySettingsWire =
        serde_json::from_value(value).map_err(|e| ApiError::Decode(format!("settings: {e}")))?;
    Ok(wire.into())
}
