//! Command-line front end for `draw-leaderboard`.

pub mod args;
pub mod output;

use anyhow::{Context, Result};
use draw_leaderboard::report;
use draw_leaderboard::stats::latest_completed_draw;
use draw_leaderboard::{BettingStats, Draw, FetchError, LeaderboardFetcher};
use output::Styled;
use serde_json::{json, Value};
use std::io::{self, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

pub use args::Cli;

/// Initialize logging on stderr. `RUST_LOG` overrides the default level.
pub fn init_tracing(verbose: bool) {
    let default = if verbose {
        "draw_leaderboard=debug"
    } else {
        "draw_leaderboard=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Fetch once and print. Fetch failures are reported, not returned.
pub async fn run(cli: Cli) -> Result<()> {
    let fetcher =
        LeaderboardFetcher::new(cli.fetcher_config()).context("failed to build HTTP client")?;
    info!("draw-leaderboard v{}", env!("CARGO_PKG_VERSION"));

    if cli.json {
        return run_json(&cli, &fetcher).await;
    }

    let s = Styled::new(output::color_enabled(cli.no_color));
    let mut out = io::stdout();

    let Some(draws) = fetcher.fetch_leaderboard_data(&mut out).await else {
        return Ok(());
    };

    for line in text_report(&s, &draws, cli.limit, cli.stats) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

async fn run_json(cli: &Cli, fetcher: &LeaderboardFetcher) -> Result<()> {
    let result = fetcher.fetch_draws().await;
    let attribute = &fetcher.config().payload_attribute;

    match &result {
        Ok(draws) => {
            eprintln!("{}", report::found_line(draws));
            if let Some(line) = report::latest_line(draws) {
                eprintln!("{line}");
            }
        }
        Err(err) => eprintln!("{}", report::failure_line(err, attribute)),
    }

    let doc = json_report(&result, cli.limit, cli.stats, attribute);
    println!("{}", output::json_string(&doc));
    Ok(())
}

/// Summary lines for the text output, with an optional statistics section.
pub fn text_report(s: &Styled, draws: &[Draw], limit: usize, with_stats: bool) -> Vec<String> {
    let mut lines: Vec<String> = draws
        .iter()
        .take(limit)
        .map(|draw| {
            report::summary_line_styled(draw, |r| {
                if draw.is_pending() {
                    s.yellow(r)
                } else {
                    s.green(r)
                }
            })
        })
        .collect();

    if with_stats {
        lines.push(String::new());
        lines.push(output::section_line(s, "Statistics"));
        let stats = BettingStats::from_draws(draws);
        lines.extend(report::stats_lines(&stats).into_iter().map(|l| format!("  {l}")));
        if let Some(draw) = latest_completed_draw(draws) {
            lines.push(format!(
                "  Latest completed draw: {} ({})",
                draw.id,
                draw.display_result()
            ));
        }
    }
    lines
}

/// JSON document for `--json`: the first `limit` draws, or the failure.
pub fn json_report(
    result: &Result<Vec<Draw>, FetchError>,
    limit: usize,
    with_stats: bool,
    payload_attribute: &str,
) -> Value {
    match result {
        Ok(draws) => {
            let shown: Vec<&Draw> = draws.iter().take(limit).collect();
            let mut doc = json!({
                "draws": shown,
                "total": draws.len(),
            });
            if with_stats {
                doc["stats"] = json!(BettingStats::from_draws(draws));
            }
            doc
        }
        Err(err) => json!({
            "draws": null,
            "error": report::failure_line(err, payload_attribute),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_json_diff::assert_json_eq;

    fn scenario() -> Vec<Draw> {
        serde_json::from_value(json!([
            {"id": 1, "result1": null, "totalBets": 10, "totalBetAmount": 500},
            {"id": 2, "result1": "3-14-22", "status": "completed", "totalBets": 5, "totalBetAmount": 250}
        ]))
        .unwrap()
    }

    #[test]
    fn test_text_report_plain() {
        let lines = text_report(&Styled::new(false), &scenario(), 5, false);
        assert_eq!(
            lines,
            vec![
                "Draw 1: Pending - Total Bets: 10 - Total Amount: 500",
                "Draw 2: 3-14-22 - Total Bets: 5 - Total Amount: 250",
            ]
        );
    }

    #[test]
    fn test_text_report_colors_result() {
        let lines = text_report(&Styled::new(true), &scenario(), 1, false);
        assert_eq!(
            lines,
            vec!["Draw 1: \x1b[33mPending\x1b[0m - Total Bets: 10 - Total Amount: 500"]
        );
    }

    #[test]
    fn test_text_report_with_stats() {
        let lines = text_report(&Styled::new(false), &scenario(), 5, true);
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "Statistics");
        assert_eq!(lines[4], "  Completed draws: 1");
        assert_eq!(lines[6], "  Total bet amount: 250");
        assert_eq!(lines.last().unwrap(), "  Latest completed draw: 2 (3-14-22)");
    }

    #[test]
    fn test_json_report_success() {
        let doc = json_report(&Ok(scenario()), 1, false, "data-page");
        assert_json_eq!(
            doc,
            json!({
                "draws": [
                    {"id": 1, "result1": null, "totalBets": 10, "totalBetAmount": 500.0}
                ],
                "total": 2
            })
        );
    }

    #[test]
    fn test_json_report_with_stats() {
        let doc = json_report(&Ok(scenario()), 5, true, "data-page");
        assert_eq!(doc["stats"]["total_draws"], json!(1));
        assert_eq!(doc["stats"]["total_bets"], json!(5));
    }

    #[test]
    fn test_json_report_failure() {
        let doc = json_report(&Err(FetchError::Status(404)), 5, false, "data-page");
        assert_json_eq!(
            doc,
            json!({
                "draws": null,
                "error": "Failed to fetch data. Status code: 404"
            })
        );
    }
}
