use thiserror::Error;

/// Failures produced by [`HttpTransport`](crate::transport::HttpTransport).
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request itself failed (connectivity, DNS, TLS, protocol).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The target could not be turned into an absolute URL.
    #[error("Invalid request URL `{url}`: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The configured proxy was rejected by `reqwest`.
    #[error("Invalid proxy URL `{url}`: {source}")]
    InvalidProxy {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The underlying `reqwest::Client` could not be built.
    #[error("Failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),
}

/// Problems found while loading [`ApiConfig`](crate::config::ApiConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid origin `{value}` (expected an absolute URL): {source}")]
    InvalidOrigin {
        value: String,
        #[source]
        source: url::ParseError,
    },
}

/// Why [`GameApiClient::from_env`](crate::client::GameApiClient::from_env)
/// could not build a client.
#[derive(Debug, Error)]
pub enum ClientInitError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Transport(#[from] TransportError),
}
