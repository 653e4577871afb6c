//! Aggregates over a fetched draw list.

use crate::types::Draw;
use serde::Serialize;

/// Totals and averages over completed draws only.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct BettingStats {
    pub total_draws: usize,
    pub total_bets: u64,
    pub total_bet_amount: f64,
    pub total_won_amount: f64,
    pub average_bet_amount: f64,
    pub average_bets_per_draw: f64,
}

impl BettingStats {
    pub fn from_draws(draws: &[Draw]) -> Self {
        let completed: Vec<&Draw> = draws.iter().filter(|d| d.is_completed()).collect();
        let total_draws = completed.len();
        let total_bets = completed.iter().map(|d| d.total_bets).sum::<u64>();
        let total_bet_amount = completed.iter().map(|d| d.total_bet_amount).sum::<f64>();
        let total_won_amount = completed
            .iter()
            .map(|d| d.total_won_amount.unwrap_or(0.0))
            .sum::<f64>();

        let (average_bet_amount, average_bets_per_draw) = if total_draws > 0 {
            let n = total_draws as f64;
            (total_bet_amount / n, total_bets as f64 / n)
        } else {
            (0.0, 0.0)
        };

        Self {
            total_draws,
            total_bets,
            total_bet_amount,
            total_won_amount,
            average_bet_amount,
            average_bets_per_draw,
        }
    }
}

/// The draw currently in progress or most recently opened.
///
/// Upstream lists the newest draw first. That order is assumed, not checked:
/// the payload has no field that would let us verify it.
pub fn current_draw(draws: &[Draw]) -> Option<&Draw> {
    draws.first()
}

/// First completed draw in upstream order.
pub fn latest_completed_draw(draws: &[Draw]) -> Option<&Draw> {
    draws.iter().find(|d| d.is_completed())
}
