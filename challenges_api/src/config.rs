//! Client configuration, read once from the environment.

use std::sync::{Arc, OnceLock};

use url::Url;

use crate::error::ConfigError;

/// Overrides the base URL every endpoint path is appended to.
pub const BASE_URL_ENV: &str = "API_BASE_URL_OVERRIDE";
/// Absolute URL that relative targets are resolved against.
pub const ORIGIN_ENV: &str = "API_ORIGIN";
/// Proxy used for all HTTP traffic.
pub const PROXY_ENV: &str = "API_PROXY";

/// Base URL used when [`BASE_URL_ENV`] is unset.
pub const DEFAULT_BASE_URL: &str = "/api";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Prefix for every endpoint path, used verbatim.
    pub base_url: String,
    pub origin: Option<Url>,
    /// Optional HTTP proxy, `http://` is assumed when no scheme is given.
    pub proxy: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            origin: None,
            proxy: None,
        }
    }

    pub fn with_origin(mut self, origin: Url) -> Self {
        self.origin = Some(origin);
        self
    }

    pub fn with_proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Build a config from an arbitrary variable source.
    ///
    /// Empty values count as unset, so `API_BASE_URL_OVERRIDE=""` still
    /// falls back to [`DEFAULT_BASE_URL`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let base_url = get(BASE_URL_ENV).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let origin = match get(ORIGIN_ENV) {
            Some(value) => match Url::parse(&value) {
                Ok(url) => Some(url),
                Err(source) => return Err(ConfigError::InvalidOrigin { value, source }),
            },
            None => None,
        };

        Ok(Self {
            base_url,
            origin,
            proxy: get(PROXY_ENV),
        })
    }

    /// Build a config from the process environment.
    ///
    /// Variables that are not valid unicode are treated as unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}

static GLOBAL: OnceLock<Arc<ApiConfig>> = OnceLock::new();

/// Process-wide configuration, loaded from the environment on first use.
///
/// Later changes to the environment are not observed. An invalid value is
/// reported on every call and nothing is cached until a load succeeds.
pub fn global() -> Result<Arc<ApiConfig>, ConfigError> {
    if let Some(config) = GLOBAL.get() {
        return Ok(Arc::clone(config));
    }
    let loaded = Arc::new(ApiConfig::from_env()?);
    Ok(Arc::clone(GLOBAL.get_or_init(|| loaded)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn base_url_defaults_to_api() {
        let config = ApiConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.base_url, "/api");
        assert_eq!(config.origin, None);
        assert_eq!(config.proxy, None);
    }

    #[test]
    fn override_is_used_verbatim() {
        for value in ["https://example.com", "http://localhost:9000", "/api/", "relative"] {
            let config = ApiConfig::from_lookup(lookup_from(&[(BASE_URL_ENV, value)])).unwrap();
            assert_eq!(config.base_url, value);
        }
    }

    #[test]
    fn empty_override_falls_back_to_default() {
        let config = ApiConfig::from_lookup(lookup_from(&[(BASE_URL_ENV, "")])).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn origin_and_proxy_are_read() {
        let config = ApiConfig::from_lookup(lookup_from(&[
            (ORIGIN_ENV, "http://localhost:3000"),
            (PROXY_ENV, "127.0.0.1:8080"),
        ]))
        .unwrap();
        assert_eq!(
            config.origin.as_ref().map(Url::as_str),
            Some("http://localhost:3000/")
        );
        assert_eq!(config.proxy.as_deref(), Some("127.0.0.1:8080"));
    }

    #[test]
    fn relative_origin_is_rejected() {
        let err = ApiConfig::from_lookup(lookup_from(&[(ORIGIN_ENV, "/not/absolute")]))
            .unwrap_err();
        match err {
            ConfigError::InvalidOrigin { value, .. } => assert_eq!(value, "/not/absolute"),
        }
    }

    #[test]
    fn default_matches_unset_environment() {
        assert_eq!(
            ApiConfig::default(),
            ApiConfig::from_lookup(lookup_from(&[])).unwrap()
        );
    }

    #[test]
    fn global_config_is_loaded_once() {
        let first = global().unwrap();
        let second = global().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }
}
