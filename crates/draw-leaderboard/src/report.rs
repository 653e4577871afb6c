//! Human-readable lines for fetch progress and draw summaries.

use crate::error::FetchError;
use crate::stats::{current_draw, BettingStats};
use crate::types::Draw;

/// Number of draws the summary shows unless asked otherwise.
pub const DEFAULT_SUMMARY_LIMIT: usize = 5;

pub fn found_line(draws: &[Draw]) -> String {
    format!("Found {} recent draws", draws.len())
}

/// Result of the first draw, which upstream lists as the most recent.
pub fn latest_line(draws: &[Draw]) -> Option<String> {
    current_draw(draws).map(|d| format!("Latest draw result: {}", d.display_result()))
}

pub fn summary_line(draw: &Draw) -> String {
    summary_line_styled(draw, str::to_string)
}

/// Like [`summary_line`], passing the displayed result through `style`.
pub fn summary_line_styled(draw: &Draw, style: impl Fn(&str) -> String) -> String {
    format!(
        "Draw {}: {} - Total Bets: {} - Total Amount: {}",
        draw.id,
        style(draw.display_result()),
        draw.total_bets,
        format_amount(draw.total_bet_amount)
    )
}

/// Summary lines for at most `limit` draws, in upstream order.
pub fn summary_lines(draws: &[Draw], limit: usize) -> Vec<String> {
    draws.iter().take(limit).map(summary_line).collect()
}

/// Diagnostic for a failed fetch. Structural failures share one fixed
/// message naming the payload attribute.
pub fn failure_line(err: &FetchError, payload_attribute: &str) -> String {
    match err {
        FetchError::Status(code) => format!("Failed to fetch data. Status code: {code}"),
        e if e.is_structural() => format!("Could not find {payload_attribute} attribute"),
        e => format!("Error fetching leaderboard data: {e}"),
    }
}

pub fn stats_lines(stats: &BettingStats) -> Vec<String> {
    vec![
        format!("Completed draws: {}", stats.total_draws),
        format!("Total bets: {}", stats.total_bets),
        format!("Total bet amount: {}", format_amount(stats.total_bet_amount)),
        format!("Total won amount: {}", format_amount(stats.total_won_amount)),
        format!("Average bet amount: {:.2}", stats.average_bet_amount),
        format!("Average bets per draw: {:.2}", stats.average_bets_per_draw),
    ]
}

/// Shortest form of an amount: whole numbers print without a fraction.
pub fn format_amount(amount: f64) -> String {
    format!("{amount}")
}
