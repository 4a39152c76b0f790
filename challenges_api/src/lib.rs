//! # Challenges API
//!
//! Asynchronous client for the challenges game server. It uses `reqwest`
//! for HTTP and exposes each endpoint as a trait method on
//! [`GameApiClient`], plus a free function that works with any
//! [`Transport`].
//!
//! ```no_run
//! use challenges_api::{GameApiClient, LeaderboardApi};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GameApiClient::from_env()?;
//! let resp = client.leaderboard().await?;
//! println!("{}", resp.status());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod transport;
pub mod util;

pub use api::leaderboard::{fetch_leaderboard, leaderboard_url, LEADERS_PATH};
pub use client::*;
pub use config::ApiConfig;
pub use transport::{HttpTransport, Transport};
