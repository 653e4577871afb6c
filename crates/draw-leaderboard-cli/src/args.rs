//! Command-line arguments.

use clap::Parser;
use draw_leaderboard::config::{DEFAULT_TIMEOUT, DEFAULT_URL};
use draw_leaderboard::report::DEFAULT_SUMMARY_LIMIT;
use draw_leaderboard::FetcherConfig;
use std::time::Duration;

/// Fetch the GTArena draw leaderboard and print the latest draws.
#[derive(Parser, Debug)]
#[command(name = "draw-leaderboard", version, about)]
pub struct Cli {
    /// Leaderboard page to fetch.
    #[arg(long, default_value = DEFAULT_URL)]
    pub url: String,

    /// Request timeout in seconds.
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_TIMEOUT.as_secs())]
    pub timeout: u64,

    /// How many draws to list.
    #[arg(long, default_value_t = DEFAULT_SUMMARY_LIMIT)]
    pub limit: usize,

    /// Also print totals over completed draws.
    #[arg(long)]
    pub stats: bool,

    /// Also accept a bare JSON response instead of the rendered page.
    #[arg(long)]
    pub accept_json: bool,

    /// Emit a JSON document on stdout; diagnostics go to stderr.
    #[arg(long)]
    pub json: bool,

    /// Log request and parse steps.
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output.
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    pub fn fetcher_config(&self) -> FetcherConfig {
        FetcherConfig::default()
            .with_url(self.url.clone())
            .with_timeout(Duration::from_secs(self.timeout))
            .with_json_body(self.accept_json)
    }
}
