//! Authentication state: token, user and permissions.
//!
//! Mirrors the `token` / `user` / `permissions` storage entries. The token is
//! stored as a raw string, the other two as JSON.

use std::sync::Arc;

use erpdesk_auth::{Permission, PermissionCheck, Session, User};
use erpdesk_client::SessionApi;
use erpdesk_core::storage::{read_json, write_json};
use erpdesk_core::{DomainResult, Storage, StorageKey};

pub struct AuthStore {
    storage: Arc<dyn Storage>,
    token: Option<String>,
    user: Option<User>,
    permissions: Vec<Permission>,
    loading: bool,
}

impl core::fmt::Debug for AuthStore {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AuthStore")
            .field("authenticated", &self.is_authenticated())
            .field("user", &self.user.as_ref().map(|u| &u.email))
            .field("permissions", &self.permissions.len())
            .field("loading", &self.loading)
            .finish()
    }
}

impl AuthStore {
    /// A store that has not read storage yet (`is_loading() == true`).
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            storage,
            token: None,
            user: None,
            permissions: Vec::new(),
            loading: true,
        }
    }

    /// `new` followed by `hydrate`.
    pub fn hydrated(storage: Arc<dyn Storage>) -> Self {
        let mut store = Self::new(storage);
        store.hydrate();
        store
    }

    /// Read the three entries. Unreadable entries are logged and ignored.
    pub fn hydrate(&mut self) {
        let storage = self.storage.as_ref();

        self.token = match storage.get(StorageKey::Token.as_str()) {
            Ok(token) => token.filter(|t| !t.trim().is_empty()),
            Err(e) => {
                tracing::warn!(error = %e, "stored token unreadable");
                None
            }
        };
        self.user = read_json::<User>(storage, StorageKey::User.as_str()).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "stored user unreadable");
            None
        });
        self.permissions = read_json::<Vec<Permission>>(storage, StorageKey::Permissions.as_str())
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "stored permissions unreadable");
                None
            })
            .unwrap_or_default();
        self.loading = false;

        tracing::info!(authenticated = self.is_authenticated(), "auth store hydrated");
    }

    /// Keep a fresh login: memory and storage both.
    pub fn set_session(&mut self, session: Session) -> DomainResult<()> {
        let storage = self.storage.as_ref();
        storage.set(StorageKey::Token.as_str(), &session.token)?;
        write_json(storage, StorageKey::User.as_str(), &session.user)?;
        write_json(storage, StorageKey::Permissions.as_str(), &session.permissions)?;

        self.token = Some(session.token);
        self.user = Some(session.user);
        self.permissions = session.permissions;
        self.loading = false;
        Ok(())
    }

    /// Forget the session locally.
    pub fn clear(&mut self) -> DomainResult<()> {
        self.token = None;
        self.user = None;
        self.permissions.clear();
        self.loading = false;

        // Every key is attempted; the first failure is reported afterwards.
        let mut first_err = None;
        for key in [StorageKey::Token, StorageKey::User, StorageKey::Permissions] {
            if let Err(e) = self.storage.remove(key.as_str()) {
                tracing::warn!(key = key.as_str(), error = %e, "could not remove session entry");
                first_err.get_or_insert(e);
            }
        }
        match first_err {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Log out on the backend, then clear local state.
    ///
    /// A failed API call is logged and otherwise ignored: local state is
    /// cleared either way.
    pub async fn logout(&mut self, api: &dyn SessionApi) -> DomainResult<()> {
        if let Err(e) = api.logout().await {
            tracing::warn!(error = %e, "logout request failed; clearing local session anyway");
        }
        self.clear()?;
        tracing::info!("logged out");
        Ok(())
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn permissions(&self) -> &[Permission] {
        &self.permissions
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Permission check over the in-memory session. Still loading until the
    /// store has been hydrated or given a session.
    pub fn permission_check(&self) -> PermissionCheck {
        if self.loading {
            return PermissionCheck::new();
        }
        PermissionCheck::from_parts(
            self.user.as_ref().and_then(|u| u.role.clone()),
            self.permissions.iter().map(Permission::as_str),
        )
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use erpdesk_auth::Role;
    use erpdesk_client::{ApiError, ApiResult};
    use erpdesk_core::{DomainError, MemoryStorage, RecordId};

    use super::*;

    struct FailingApi;

    #[async_trait]
    impl SessionApi for FailingApi {
        async fn logout(&self) -> ApiResult<()> {
            Err(ApiError::Network("connection refused".into()))
        }
    }

    fn session(role: &'static str) -> Session {
        Session {
            token: "tok-1".into(),
            user: User {
                id: RecordId::from(1u64),
                name: "Sam".into(),
                email: "sam@shop.test".into(),
                role: Some(Role::new(role)),
                avatar_url: None,
                company_id: None,
            },
            permissions: vec![Permission::new("sales.view")],
        }
    }

    fn storage() -> Arc<dyn Storage> {
        Arc::new(MemoryStorage::new())
    }

    /// Memory storage that refuses to remove one key.
    struct StuckKey {
        inner: MemoryStorage,
        stuck: &'static str,
    }

    impl Storage for StuckKey {
        fn get(&self, key: &str) -> DomainResult<Option<String>> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> DomainResult<()> {
            self.inner.set(key, value)
        }

        fn remove(&self, key: &str) -> DomainResult<()> {
            if key == self.stuck {
                return Err(DomainError::storage("disk is read-only"));
            }
            self.inner.remove(key)
        }

        fn keys(&self) -> DomainResult<Vec<String>> {
            self.inner.keys()
        }
    }

    #[test]
    fn clear_removes_every_key_even_when_one_fails() {
        let storage: Arc<dyn Storage> = Arc::new(StuckKey {
            inner: MemoryStorage::new(),
            stuck: "token",
        });
        let mut store = AuthStore::new(storage.clone());
        store.set_session(session("cashier")).unwrap();

        assert!(store.clear().is_err());
        assert!(!store.is_authenticated());
        assert_eq!(storage.keys().unwrap(), vec!["token".to_string()]);
    }

    #[test]
    fn session_round_trips_through_storage() {
        let storage = storage();
        let mut store = AuthStore::new(storage.clone());
        assert!(store.is_loading());
        store.set_session(session("cashier")).unwrap();

        assert_eq!(storage.get("token").unwrap().as_deref(), Some("tok-1"));

        let restored = AuthStore::hydrated(storage);
        assert!(restored.is_authenticated());
        assert_eq!(restored.permissions(), &[Permission::new("sales.view")]);
        assert!(restored.permission_check().has_permission("sales.view"));
        assert!(!restored.permission_check().has_permission("roles.edit"));
    }

    #[test]
    fn permission_check_waits_for_hydration() {
        let store = AuthStore::new(storage());
        assert!(store.permission_check().is_loading());
    }

    #[test]
    fn super_role_sees_everything() {
        let mut store = AuthStore::new(storage());
        store.set_session(session("super_admin")).unwrap();
        assert!(store.permission_check().has_permission("settings.edit"));
    }

    #[tokio::test]
    async fn logout_clears_state_even_when_the_api_fails() {
        let storage = storage();
        let mut store = AuthStore::new(storage.clone());
        store.set_session(session("cashier")).unwrap();

        store.logout(&FailingApi).await.unwrap();

        assert!(!store.is_authenticated());
        assert!(store.permissions().is_empty());
        assert!(storage.keys().unwrap().is_empty());
    }

    #[test]
    fn garbage_in_storage_means_logged_out() {
        let storage = storage();
        storage.set("user", "{oops").unwrap();
        storage.set("permissions", "42").unwrap();
        let store = AuthStore::hydrated(storage);
        assert!(!store.is_authenticated());
        assert!(store.permissions().is_empty());
        assert!(!store.is_loading());
    }
}
