//! `erpdesk-client`: typed wrappers over the dashboard's REST backend.
//!
//! Layering:
//! - [`http::ApiClient`]: one `reqwest` client, base URL, bearer token.
//! - [`envelope`]: `data` envelopes and pagination pass-through.
//! - [`dto`]: backend-shaped (snake_case) wire types and their conversions to
//!   and from the dashboard records.
//! - [`resource::ResourceService`]: get-all / get-by-id / create / update /
//!   delete for every CRUD resource.
//! - [`services`]: the resource catalog plus auth, settings, permissions and
//!   reports.
//!
//! No retries, no caching. Errors propagate to the caller as [`ApiError`].

pub mod config;
pub mod dto;
pub mod envelope;
pub mod error;
pub mod http;
pub mod resource;
pub mod services;

pub use config::ClientConfig;
pub use dto::settings::CompanySettings;
pub use envelope::{Envelope, ListQuery, Page, PageMeta};
pub use error::{ApiError, ApiResult};
pub use http::ApiClient;
pub use resource::{Resource, ResourceService};
pub use services::Services;
pub use services::auth::{AuthService, SessionApi};
