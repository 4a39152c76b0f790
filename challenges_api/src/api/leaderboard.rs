use tracing::debug;

use crate::{
    client::GameApiClient, config::ApiConfig, transport::Transport, util::endpoint_url,
};

/// Path of the leaderboard resource, relative to the base URL.
pub const LEADERS_PATH: &str = "/leaders";

/// Full leaderboard target for `config`: base URL followed by [`LEADERS_PATH`].
pub fn leaderboard_url(config: &ApiConfig) -> String {
    endpoint_url(&config.base_url, LEADERS_PATH)
}

/// Issue one GET for the leaderboard and hand back whatever the transport
/// returns.
///
/// The returned future does nothing until awaited. Status codes are not
/// checked and the body is not read; a transport failure comes back as the
/// transport's own error, untouched.
pub async fn fetch_leaderboard<T: Transport>(
    config: &ApiConfig,
    transport: &T,
) -> Result<T::Response, T::Error> {
    let url = leaderboard_url(config);
    debug!(%url, "fetching leaderboard");
    transport.get(&url).await
}

#[async_trait::async_trait]
pub trait LeaderboardApi {
    type Response: Send;
    type Error: Send;

    /// Fetch the leaderboard from `<base_url>/leaders`.
    async fn leaderboard(&self) -> Result<Self::Response, Self::Error>;
}

#[async_trait::async_trait]
impl<T: Transport> LeaderboardApi for GameApiClient<T> {
    type Response = T::Response;
    type Error = T::Error;

    async fn leaderboard(&self) -> Result<T::Response, T::Error> {
        fetch_leaderboard(self.config(), self.transport()).await
    }
}
