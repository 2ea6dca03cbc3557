//! Client configuration, read from the environment.

use std::path::PathBuf;
use std::time::Duration;

/// Where the backend lives and where local state is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the REST API, without a trailing slash.
    pub api_url: String,
    /// Bearer token to start with (normally restored from storage instead).
    pub token: Option<String>,
    /// Directory for the storage file.
    pub data_dir: PathBuf,
    /// Per-request timeout. `None` keeps the HTTP client's default.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    pub const DEFAULT_API_URL: &'static str = "http://localhost:8000/api";

    pub const ENV_API_URL: &'static str = "ERPDESK_API_URL";
    pub const ENV_TOKEN: &'static str = "ERPDESK_TOKEN";
    pub const ENV_DATA_DIR: &'static str = "ERPDESK_DATA_DIR";
    pub const ENV_TIMEOUT_SECS: &'static str = "ERPDESK_TIMEOUT_SECS";

    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: normalize_base_url(&api_url.into()),
            token: None,
            data_dir: default_data_dir(),
            timeout: None,
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup (the environment in
    /// production, a map in tests).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_url = non_empty(Self::ENV_API_URL).unwrap_or_else(|| {
            tracing::debug!("{} not set; using {}", Self::ENV_API_URL, Self::DEFAULT_API_URL);
            Self::DEFAULT_API_URL.to_string()
        });

        let timeout = non_empty(Self::ENV_TIMEOUT_SECS).and_then(|raw| match raw.trim().parse::<u64>() {
            Ok(secs) if secs > 0 => Some(Duration::from_secs(secs)),
            _ => {
                tracing::warn!("ignoring invalid {}={raw:?}", Self::ENV_TIMEOUT_SECS);
                None
            }
        });

        Self {
            api_url: normalize_base_url(&api_url),
            token: non_empty(Self::ENV_TOKEN),
            data_dir: non_empty(Self::ENV_DATA_DIR)
                .map(PathBuf::from)
                .unwrap_or_else(default_data_dir),
            timeout,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_API_URL)
    }
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("erpdesk")
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let cfg = ClientConfig::from_lookup(lookup(&[]));
        assert_eq!(cfg.api_url, ClientConfig::DEFAULT_API_URL);
        assert_eq!(cfg.token, None);
        assert_eq!(cfg.timeout, None);
        assert!(cfg.data_dir.ends_with("erpdesk"));
    }

    #[test]
    fn reads_every_variable() {
        let cfg = ClientConfig::from_lookup(lookup(&[
            ("ERPDESK_API_URL", "https://erp.example.test/api/"),
            ("ERPDESK_TOKEN", "tok"),
            ("ERPDESK_DATA_DIR", "/tmp/erpdesk-test"),
            ("ERPDESK_TIMEOUT_SECS", "15"),
        ]));
        assert_eq!(cfg.api_url, "https://erp.example.test/api");
        assert_eq!(cfg.token.as_deref(), Some("tok"));
        assert_eq!(cfg.data_dir, PathBuf::from("/tmp/erpdesk-test"));
        assert_eq!(cfg.timeout, Some(Duration::from_secs(15)));
    }

    #[test]
    fn invalid_or_blank_values_fall_back() {
        let cfg = ClientConfig::from_lookup(lookup(&[
            ("ERPDESK_API_URL", "  "),
            ("ERPDESK_TIMEOUT_SECS", "soon"),
        ]));
        assert_eq!(cfg.api_url, ClientConfig::DEFAULT_API_URL);
        assert_eq!(cfg.timeout, None);
    }
}
