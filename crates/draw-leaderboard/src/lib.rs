//! Fetch and decode the GTArena draw leaderboard.
//!
//! The leaderboard page is rendered server-side and carries its data as a
//! JSON blob in the `data-page` attribute of the `#app` container. This crate
//! fetches that page, pulls the blob out, and decodes `props.draws` into
//! typed [`Draw`] records.

pub mod config;
pub mod error;
pub mod extract;
pub mod fetcher;
pub mod report;
pub mod stats;
pub mod types;

pub use config::FetcherConfig;
pub use error::{FetchError, Result};
pub use fetcher::LeaderboardFetcher;
pub use stats::BettingStats;
pub use types::{Draw, DrawDetails, DrawId};
