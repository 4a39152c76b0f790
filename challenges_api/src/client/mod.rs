mod client;

pub use client::GameApiClient;

pub use crate::{
    api::leaderboard::LeaderboardApi,
    error::{ClientInitError, ConfigError, TransportError},
};
