//! The seam between the fetcher and the network.
//!
//! [`HttpTransport`] talks to a real server through `reqwest`. Anything
//! else implementing [`Transport`] can stand in for it.

use reqwest::{Client, ClientBuilder, Proxy, Response};
use url::Url;

use crate::config::ApiConfig;
use crate::error::TransportError;
use crate::util::resolve_target;

/// Issues a single GET per call.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    type Response: Send;
    type Error: Send;

    /// Send one GET request to `url` with no body and no extra headers.
    async fn get(&self, url: &str) -> Result<Self::Response, Self::Error>;
}

/// `reqwest`-backed transport.
///
/// No timeouts are set, so `reqwest`'s defaults apply.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: Client,
    origin: Option<Url>,
}

impl HttpTransport {
    pub fn new(config: &ApiConfig) -> Result<Self, TransportError> {
        let mut builder = ClientBuilder::new().use_rustls_tls();

        if let Some(ref p) = config.proxy {
            let full = if p.starts_with("http://") || p.starts_with("https://") {
                p.clone()
            } else {
                format!("http://{p}")
            };

            let proxy = Proxy::all(&full)
                .map_err(|source| TransportError::InvalidProxy { url: full, source })?;
            builder = builder.proxy(proxy);
        }

        let http = builder.build().map_err(TransportError::Build)?;

        Ok(Self {
            http,
            origin: config.origin.clone(),
        })
    }

    /// Reuse an existing `reqwest::Client`.
    pub fn from_client(http: Client, origin: Option<Url>) -> Self {
        Self { http, origin }
    }

    pub fn origin(&self) -> Option<&Url> {
        self.origin.as_ref()
    }
}

#[async_trait::async_trait]
impl Transport for HttpTransport {
    type Response = Response;
    type Error = TransportError;

    async fn get(&self, url: &str) -> Result<Response, TransportError> {
        let target = resolve_target(self.origin.as_ref(), url).map_err(|source| {
            TransportError::InvalidUrl {
                url: url.to_string(),
                source,
            }
        })?;

        Ok(self.http.get(target).send().await?)
    }
}
