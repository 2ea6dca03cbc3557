use crate::dto::reports::{ProfitSummary, Report, SalesSummary, StockSummary};
use crate::envelope::{Envelope, ListQuery, expect_any_key};
use crate::error::{ApiError, ApiResult};
use crate::http::ApiClient;

/// Read-only report endpoints. Filters (date range, warehouse, ...) go in the
/// query and are passed through as given.
#[derive(Debug, Clone)]
pub struct ReportService {
    client: ApiClient,
}

impl ReportService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn sales_summary(&self, query: &ListQuery) -> ApiResult<SalesSummary> {
        self.fetch("/reports/sales", query).await
    }

    pub async fn profit_summary(&self, query: &ListQuery) -> ApiResult<ProfitSummary> {
        self.fetch("/reports/profit", query).await
    }

    pub async fn stock_summary(&self, query: &ListQuery) -> ApiResult<StockSummary> {
        self.fetch("/reports/stock", query).await
    }

    /// Every summary field is optional, so a reply with none of them is
    /// rejected instead of read as an all-zero report.
    async fn fetch<T: Report>(&self, path: &str, query: &ListQuery) -> ApiResult<T> {
        let env: Envelope<serde_json::Value> = self.client.get_with_query(path, query).await?;
        let value = env.into_inner();
        expect_any_key(&value, T::KEYS, path).map_err(ApiError::Decode)?;
        serde_json::from_value(value).map_err(|e| ApiError::Decode(format!("{path}: {e}")))
    }
}
