//! Game API client.
//!
//! Bundles an immutable [`ApiConfig`] with a [`Transport`]. Endpoint
//! operations live in [`crate::api`] as traits implemented on
//! [`GameApiClient`].

use std::sync::Arc;

use crate::config::{self, ApiConfig};
use crate::error::{ClientInitError, TransportError};
use crate::transport::{HttpTransport, Transport};

/// Main client to interact with the game server.
#[derive(Debug, Clone)]
pub struct GameApiClient<T = HttpTransport> {
    config: Arc<ApiConfig>,
    transport: T,
}

impl GameApiClient<HttpTransport> {
    /// Construct a client that talks HTTP through `reqwest`.
    pub fn new(config: ApiConfig) -> Result<Self, TransportError> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self::with_transport(config, transport))
    }

    /// Construct a client from the process-wide configuration.
    pub fn from_env() -> Result<Self, ClientInitError> {
        let config = config::global()?;
        let transport = HttpTransport::new(&config)?;
        Ok(Self { config, transport })
    }
}

impl<T: Transport> GameApiClient<T> {
    /// Construct a client over any transport.
    pub fn with_transport(config: ApiConfig, transport: T) -> Self {
        Self {
            config: Arc::new(config),
            transport,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_keeps_config() {
        let client = GameApiClient::new(ApiConfig::new("http://localhost:9000")).unwrap();
        assert_eq!(client.config().base_url, "http://localhost:9000");
        assert_eq!(client.transport().origin(), None);
    }

    #[test]
    fn clones_share_config() {
        let client = GameApiClient::new(ApiConfig::default()).unwrap();
        let other = client.clone();
        assert!(std::ptr::eq(client.config(), other.config()));
    }

    #[test]
    fn from_env_shares_the_global_config() {
        let client = GameApiClient::from_env().unwrap();
        let global = config::global().unwrap();
        assert!(std::ptr::eq(client.config(), &*global));
    }

    #[test]
    fn bad_proxy_is_an_error_not_a_panic() {
        let config = ApiConfig::default().with_proxy("http://[::1");
        let err = GameApiClient::new(config).unwrap_err();
        assert!(matches!(err, TransportError::InvalidProxy { .. }));
    }
}
