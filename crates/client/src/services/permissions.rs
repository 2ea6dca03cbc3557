use erpdesk_auth::PermissionRecord;

use crate::dto::access::PermissionWire;
use crate::envelope::{ListQuery, Page};
use crate::error::ApiResult;
use crate::http::ApiClient;

/// The backend's permission catalog, used by the role editor.
#[derive(Debug, Clone)]
pub struct PermissionService {
    client: ApiClient,
}

impl PermissionService {
    pub const PATH: &'static str = "/permissions";

    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> ApiResult<Vec<PermissionRecord>> {
        let page: Page<PermissionWire> = self.client.get_with_query(Self::PATH, &ListQuery::new()).await?;
        Ok(page.items.into_iter().map(Into::into).collect())
    }
}
