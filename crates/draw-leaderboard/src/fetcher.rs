//! One-shot leaderboard fetch.

use crate::config::FetcherConfig;
use crate::error::{FetchError, Result};
use crate::extract::extract_draws;
use crate::report;
use crate::types::Draw;
use reqwest::Client;
use std::io::Write;
use tracing::{debug, warn};

/// Fetches the leaderboard page and decodes its draws.
///
/// Each call performs exactly one GET; nothing is cached between calls.
pub struct LeaderboardFetcher {
    client: Client,
    config: FetcherConfig,
}

impl LeaderboardFetcher {
    /// Build a fetcher whose HTTP client enforces the configured timeout and
    /// user agent.
    pub fn new(config: FetcherConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &FetcherConfig {
        &self.config
    }

    /// Fetch and decode the draws, keeping the failure kind.
    pub async fn fetch_draws(&self) -> Result<Vec<Draw>> {
        debug!("fetching leaderboard from {}", self.config.url);

        let response = self.client.get(&self.config.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        debug!("received {} bytes ({status})", body.len());

        let draws = extract_draws(&body, &self.config)?;
        debug!("decoded {} draws", draws.len());
        Ok(draws)
    }

    /// Fetch the draws, writing progress and diagnostics to `out`.
    ///
    /// Every failure is reported on `out` and collapses to `None`.
    pub async fn fetch_leaderboard_data<W: Write>(&self, out: &mut W) -> Option<Vec<Draw>> {
        match self.fetch_draws().await {
            Ok(draws) => {
                writeln!(out, "{}", report::found_line(&draws)).ok();
                if let Some(line) = report::latest_line(&draws) {
                    writeln!(out, "{line}").ok();
                }
                Some(draws)
            }
            Err(err) => {
                warn!("leaderboard fetch failed: {err}");
                writeln!(
                    out,
                    "{}",
                    report::failure_line(&err, &self.config.payload_attribute)
                )
                .ok();
                None
            }
        }
    }
}
