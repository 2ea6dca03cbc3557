//! Login, current user and logout.

use async_trait::async_trait;
use serde::Deserialize;

use erpdesk_auth::{Session, User};

use crate::dto::access::{LoginRequest, LoginResponseWire, UserWire};
use crate::envelope::Envelope;
use crate::error::ApiResult;
use crate::http::ApiClient;

/// The part of the auth API the session store needs. Kept as a trait so the
/// store can be driven without a backend.
#[async_trait]
pub trait SessionApi: Send + Sync {
    async fn logout(&self) -> ApiResult<()>;
}

#[derive(Debug, Clone)]
pub struct AuthService {
    client: ApiClient,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MeShape {
    Nested { user: UserWire },
    Plain(UserWire),
}

impl AuthService {
    pub const LOGIN_PATH: &'static str = "/auth/login";
    pub const ME_PATH: &'static str = "/auth/me";
    pub const LOGOUT_PATH: &'static str = "/auth/logout";

    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Exchange credentials for a session. On success the bearer token is set
    /// on the shared client, so every service sends it from now on.
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<Session> {
        let request = LoginRequest {
            email: email.trim(),
            password,
        };
        let env: Envelope<LoginResponseWire> = self.client.post(Self::LOGIN_PATH, &request).await?;
        let session = Session::from(env.into_inner());

        self.client.set_token(Some(session.token.clone()));
        tracing::info!(
            user_id = %session.user.id,
            role = session.role().map(|r| r.as_str()).unwrap_or("-"),
            permissions = session.permissions.len(),
            "logged in"
        );
        Ok(session)
    }

    pub async fn me(&self) -> ApiResult<User> {
        let env: Envelope<MeShape> = self.client.get(Self::ME_PATH).await?;
        let wire = match env.into_inner() {
            MeShape::Nested { user } | MeShape::Plain(user) => user,
        };
        Ok(wire.into())
    }

    /// Tell the backend to drop the token. The client forgets the token
    /// whatever the outcome.
    pub async fn logout(&self) -> ApiResult<()> {
        let result = self
            .client
            .post_unit(Self::LOGOUT_PATH, &serde_json::json!({}))
            .await;
        self.client.set_token(None);
        result
    }
}

#[async_trait]
impl SessionApi for AuthService {
    async fn logout(&self) -> ApiResult<()> {
        AuthService::logout(self).await
    }
}
