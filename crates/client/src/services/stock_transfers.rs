use erpdesk_core::RecordId;
use erpdesk_inventory::{StockTransfer, TransferStatus};

use crate::dto::inventory::{StockTransferWire, TransferStatusPayload};
use crate::envelope::Envelope;
use crate::error::ApiResult;
use crate::resource::ResourceService;
use crate::services::resources::StockTransfers;

impl ResourceService<StockTransfers> {
    /// Move a transfer through the backend's workflow. The backend decides
    /// which transitions are allowed.
    pub async fn update_status(&self, id: &RecordId, status: TransferStatus) -> ApiResult<StockTransfer> {
        let path = format!("{}/status", Self::item_path(id));
        let env: Envelope<StockTransferWire> = self.client().put(&path, &TransferStatusPayload { status }).await?;
        tracing::info!(%id, status = status.as_str(), "stock transfer status updated");
        Ok(env.into_inner().into())
    }
}
