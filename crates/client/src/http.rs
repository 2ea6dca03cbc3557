//! Shared HTTP client.

use std::sync::{Arc, RwLock};

use reqwest::{Method, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::envelope::ListQuery;
use crate::error::{ApiError, ApiResult};

/// Thin JSON client over `reqwest`.
///
/// Cheap to clone; clones share the connection pool and the bearer token, so
/// a token set after login is seen by every service.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Arc<RwLock<Option<String>>>,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> ApiResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| ApiError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            token: Arc::new(RwLock::new(config.token.clone())),
        })
    }

    /// Client for `base_url` with default settings.
    pub fn with_base_url(base_url: impl Into<String>) -> ApiResult<Self> {
        Self::new(&ClientConfig::new(base_url))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn set_token(&self, token: Option<String>) {
        match self.token.write() {
            Ok(mut slot) => *slot = token,
            Err(poisoned) => *poisoned.into_inner() = token,
        }
    }

    pub fn token(&self) -> Option<String> {
        match self.token.read() {
            Ok(slot) => slot.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// `base_url` + `path`, with exactly one slash between them.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let body = self.execute(self.request(Method::GET, path)).await?;
        decode(&body)
    }

    pub async fn get_with_query<T: DeserializeOwned>(&self, path: &str, query: &ListQuery) -> ApiResult<T> {
        let mut req = self.request(Method::GET, path);
        if !query.is_empty() {
            req = req.query(query.params());
        }
        let body = self.execute(req).await?;
        decode(&body)
    }

    pub async fn post<B, T>(&self, path: &str, payload: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = self.execute(self.request(Method::POST, path).json(payload)).await?;
        decode(&body)
    }

    /// POST whose response body is ignored.
    pub async fn post_unit<B>(&self, path: &str, payload: &B) -> ApiResult<()>
    where
        B: Serialize + ?Sized,
    {
        self.execute(self.request(Method::POST, path).json(payload)).await?;
        Ok(())
    }

    pub async fn put<B, T>(&self, path: &str, payload: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = self.execute(self.request(Method::PUT, path).json(payload)).await?;
        decode(&body)
    }

    pub async fn delete(&self, path: &str) -> ApiResult<()> {
        self.execute(self.request(Method::DELETE, path)).await?;
        Ok(())
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut req = self
            .http
            .request(method, self.url(path))
            .header(reqwest::header::ACCEPT, "application/json");
        if let Some(token) = self.token() {
            req = req.bearer_auth(token);
        }
        req
    }

    /// Send, check the status, return the raw body.
    async fn execute(&self, req: RequestBuilder) -> ApiResult<String> {
        let req = req.build()?;
        let method = req.method().clone();
        let url = req.url().clone();
        tracing::debug!(%method, path = url.path(), "api request");

        let resp = self.http.execute(req).await?;
        let status = resp.status();
        let body = resp.text().await?;

        if status.is_success() {
            return Ok(body);
        }

        tracing::debug!(%method, path = url.path(), status = status.as_u16(), "api request failed");
        Err(status_error(status, &body))
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> ApiResult<T> {
    // Empty 2xx bodies (204, bare 200) decode as `null`.
    let body = if body.trim().is_empty() { "null" } else { body };
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Map a non-2xx response to an error, preferring the backend's own message.
fn status_error(status: StatusCode, body: &str) -> ApiError {
    if status == StatusCode::UNAUTHORIZED {
        return ApiError::Unauthorized;
    }

    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| {
            ["message", "error"]
                .iter()
                .find_map(|key| json.get(key).and_then(|v| v.as_str()).map(str::to_string))
        })
        .unwrap_or_else(|| {
            let text = body.trim();
            if text.is_empty() {
                status.canonical_reason().unwrap_or("request failed").to_string()
            } else {
                text.to_string()
            }
        });

    ApiError::Status {
        status: status.as_u16(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_with_a_single_slash() {
        let client = ApiClient::with_base_url("http://erp.test/api/").unwrap();
        assert_eq!(client.url("/customers"), "http://erp.test/api/customers");
        assert_eq!(client.url("customers/4"), "http://erp.test/api/customers/4");
    }

    #[test]
    fn token_is_shared_between_clones() {
        let a = ApiClient::with_base_url("http://erp.test").unwrap();
        let b = a.clone();
        a.set_token(Some("t-1".into()));
        assert_eq!(b.token().as_deref(), Some("t-1"));
        b.set_token(None);
        assert_eq!(a.token(), None);
    }

    #[test]
    fn status_errors_prefer_backend_message() {
        let err = status_error(StatusCode::UNPROCESSABLE_ENTITY, r#"{"message":"The name field is required."}"#);
        assert!(matches!(err, ApiError::Status { status: 422, ref message } if message == "The name field is required."));

        let err = status_error(StatusCode::INTERNAL_SERVER_ERROR, r#"{"error":"boom"}"#);
        assert!(matches!(err, ApiError::Status { status: 500, ref message } if message == "boom"));

        let err = status_error(StatusCode::BAD_GATEWAY, "");
        assert!(matches!(err, ApiError::Status { status: 502, ref message } if message == "Bad Gateway"));

        assert!(matches!(status_error(StatusCode::UNAUTHORIZED, "{}"), ApiError::Unauthorized));
    }

    #[test]
    fn empty_body_decodes_as_null() {
        decode::<()>("").unwrap();
        let opt: Option<u32> = decode("  ").unwrap();
        assert_eq!(opt, None);
    }
}
