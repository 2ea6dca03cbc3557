//! Generic CRUD wrapper.
//!
//! A [`Resource`] names an endpoint and the four shapes that travel over it:
//! the dashboard record and input, and their backend (wire) counterparts. The
//! field renaming lives in the `From` conversions between those shapes, so
//! [`ResourceService`] itself never touches field names.

use core::marker::PhantomData;

use serde::Serialize;
use serde::de::DeserializeOwned;

use erpdesk_core::naming::camelize_keys;
use erpdesk_core::{DomainResult, Entity, RecordId};

use crate::envelope::{Envelope, ListQuery, Page};
use crate::error::ApiResult;
use crate::http::ApiClient;

/// A CRUD endpoint of the backend.
pub trait Resource {
    /// Collection path, e.g. `/customers`.
    const PATH: &'static str;

    /// Short name used in logs.
    const NAME: &'static str;

    /// Dashboard record.
    type Record: Entity;

    /// Backend record shape.
    type Wire: DeserializeOwned + Into<Self::Record>;

    /// Dashboard create/update form.
    type Input;

    /// Backend create/update payload.
    type Payload: Serialize + for<'a> From<&'a Self::Input>;

    /// Checks run before a create or update is sent.
    fn validate(_input: &Self::Input) -> DomainResult<()> {
        Ok(())
    }
}

/// get-all / get-by-id / create / update / delete for one [`Resource`].
pub struct ResourceService<R> {
    client: ApiClient,
    _resource: PhantomData<fn() -> R>,
}

impl<R> Clone for ResourceService<R> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            _resource: PhantomData,
        }
    }
}

impl<R> core::fmt::Debug for ResourceService<R>
where
    R: Resource,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ResourceService")
            .field("path", &R::PATH)
            .field("base_url", &self.client.base_url())
            .finish()
    }
}

impl<R: Resource> ResourceService<R> {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            _resource: PhantomData,
        }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub(crate) fn item_path(id: &RecordId) -> String {
        format!("{}/{}", R::PATH, id)
    }

    /// All records on the requested page (query passed through untouched).
    pub async fn get_all(&self, query: &ListQuery) -> ApiResult<Vec<R::Record>> {
        Ok(self.get_page(query).await?.items)
    }

    /// Records plus whatever pagination the backend reported.
    pub async fn get_page(&self, query: &ListQuery) -> ApiResult<Page<R::Record>> {
        let page: Page<R::Wire> = self.client.get_with_query(R::PATH, query).await?;
        tracing::debug!(resource = R::NAME, count = page.items.len(), "listed");
        Ok(page.map(Into::into))
    }

    pub async fn get_by_id(&self, id: &RecordId) -> ApiResult<R::Record> {
        let env: Envelope<R::Wire> = self.client.get(&Self::item_path(id)).await?;
        Ok(env.into_inner().into())
    }

    /// The record as the backend sent it, unwrapped, with keys renamed to
    /// camelCase. Carries fields the typed record leaves out.
    pub async fn get_raw(&self, id: &RecordId) -> ApiResult<serde_json::Value> {
        let env: Envelope<serde_json::Value> = self.client.get(&Self::item_path(id)).await?;
        Ok(camelize_keys(env.into_inner()))
    }

    pub async fn create(&self, input: &R::Input) -> ApiResult<R::Record> {
        R::validate(input)?;
        let payload = R::Payload::from(input);
        let env: Envelope<R::Wire> = self.client.post(R::PATH, &payload).await?;
        let record: R::Record = env.into_inner().into();
        tracing::info!(resource = R::NAME, id = %record.id(), "created");
        Ok(record)
    }

    pub async fn update(&self, id: &RecordId, input: &R::Input) -> ApiResult<R::Record> {
        R::validate(input)?;
        let payload = R::Payload::from(input);
        let env: Envelope<R::Wire> = self.client.put(&Self::item_path(id), &payload).await?;
        tracing::info!(resource = R::NAME, %id, "updated");
        Ok(env.into_inner().into())
    }

    pub async fn delete(&self, id: &RecordId) -> ApiResult<()> {
        self.client.delete(&Self::item_path(id)).await?;
        tracing::info!(resource = R::NAME, %id, "deleted");
        Ok(())
    }
}
