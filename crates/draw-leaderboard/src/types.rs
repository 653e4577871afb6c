//! Draw records as embedded in the leaderboard page payload.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder shown for a draw that has no result yet.
pub const PENDING: &str = "Pending";

/// Status value the upstream uses for a settled draw.
pub const STATUS_COMPLETED: &str = "completed";

/// Opaque draw identifier. Upstream sends either a number or a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DrawId {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for DrawId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawId::Number(n) => write!(f, "{n}"),
            DrawId::Text(s) => f.write_str(s),
        }
    }
}

/// One betting round on the leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Draw {
    pub id: DrawId,
    /// Outcome of the round. `None` or empty while the draw is running.
    #[serde(default)]
    pub result1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result2: Option<String>,
    /// Missing or `null` reads as 0. Integral floats such as `10.0` are
    /// accepted.
    #[serde(default, deserialize_with = "count_or_zero")]
    pub total_bets: u64,
    #[serde(default, deserialize_with = "amount_or_zero")]
    pub total_bet_amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_won_amount: Option<f64>,
    /// Upstream creation time, kept verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<DrawDetails>,
}

/// Per-side bet totals and odds.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawDetails {
    #[serde(default)]
    pub red_total_bet_amount: f64,
    #[serde(default)]
    pub blue_total_bet_amount: f64,
    #[serde(default)]
    pub draw_total_bet_amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub red_odds: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blue_odds: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub draw_odds: Option<f64>,
}

impl Draw {
    /// The result to show: `result1`, or [`PENDING`] when absent or empty.
    pub fn display_result(&self) -> &str {
        match self.result1.as_deref() {
            Some(r) if !r.is_empty() => r,
            _ => PENDING,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.result1.as_deref().map_or(true, str::is_empty)
    }

    pub fn is_completed(&self) -> bool {
        self.status.as_deref() == Some(STATUS_COMPLETED)
    }
}

fn count_or_zero<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    let Some(n) = Option::<serde_json::Number>::deserialize(deserializer)? else {
        return Ok(0);
    };
    n.as_u64()
        .or_else(|| {
            n.as_f64()
                .filter(|f| *f >= 0.0 && f.fract() == 0.0 && *f <= u64::MAX as f64)
                .map(|f| f as u64)
        })
        .ok_or_else(|| de::Error::custom(format!("invalid bet count {n}")))
}

fn amount_or_zero<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_minimal_draw() {
        let draw: Draw = serde_json::from_value(json!({
            "id": 1,
            "result1": null,
            "totalBets": 10,
            "totalBetAmount": 500
        }))
        .unwrap();

        assert_eq!(draw.id.to_string(), "1");
        assert_eq!(draw.result1, None);
        assert_eq!(draw.total_bets, 10);
        assert_eq!(draw.total_bet_amount, 500.0);
        assert!(draw.status.is_none());
        assert!(draw.details.is_none());
    }

    #[test]
    fn test_string_id_kept_verbatim() {
        let draw: Draw = serde_json::from_value(json!({
            "id": "9f1c-77",
            "result1": "meron",
            "totalBets": 3,
            "totalBetAmount": 120.5
        }))
        .unwrap();

        assert_eq!(draw.id, DrawId::Text("9f1c-77".to_string()));
        assert_eq!(draw.id.to_string(), "9f1c-77");
    }

    #[test]
    fn test_display_result_pending() {
        let mut draw: Draw = serde_json::from_value(json!({"id": 4})).unwrap();
        assert_eq!(draw.display_result(), PENDING);
        assert!(draw.is_pending());

        draw.result1 = Some(String::new());
        assert_eq!(draw.display_result(), PENDING);
        assert!(draw.is_pending());

        draw.result1 = Some("3-14-22".to_string());
        assert_eq!(draw.display_result(), "3-14-22");
        assert!(!draw.is_pending());
    }

    #[test]
    fn test_missing_totals_default_to_zero() {
        let draw: Draw = serde_json::from_value(json!({"id": 7, "result1": "wala"})).unwrap();
        assert_eq!(draw.total_bets, 0);
        assert_eq!(draw.total_bet_amount, 0.0);
    }

    #[test]
    fn test_null_totals_read_as_zero() {
        let draw: Draw = serde_json::from_value(json!({
            "id": 8,
            "result1": null,
            "totalBets": null,
            "totalBetAmount": null
        }))
        .unwrap();
        assert_eq!(draw.total_bets, 0);
        assert_eq!(draw.total_bet_amount, 0.0);
    }

    #[test]
    fn test_float_bet_count() {
        let draw: Draw =
            serde_json::from_value(json!({"id": 9, "totalBets": 10.0, "totalBetAmount": 5}))
                .unwrap();
        assert_eq!(draw.total_bets, 10);

        let fractional = serde_json::from_value::<Draw>(json!({"id": 9, "totalBets": 2.5}));
        assert!(fractional.is_err());
        let negative = serde_json::from_value::<Draw>(json!({"id": 9, "totalBets": -1}));
        assert!(negative.is_err());
    }

    #[test]
    fn test_details_and_status() {
        let draw: Draw = serde_json::from_value(json!({
            "id": 12,
            "result1": "meron",
            "status": "completed",
            "totalBets": 40,
            "totalBetAmount": 9000,
            "totalWonAmount": 8500.25,
            "createdAt": "2025-11-10T08:15:00.000Z",
            "details": {
                "redTotalBetAmount": 5000,
                "blueTotalBetAmount": 3500,
                "redOdds": 1.85
            },
            "batch": {"fightSequence": 3}
        }))
        .unwrap();

        assert!(draw.is_completed());
        assert_eq!(draw.total_won_amount, Some(8500.25));
        let details = draw.details.unwrap();
        assert_eq!(details.draw_total_bet_amount, 0.0);
        assert_eq!(details.red_total_bet_amount, 5000.0);
        assert_eq!(details.red_odds, Some(1.85));
        assert_eq!(details.blue_odds, None);
    }

    #[test]
    fn test_serialize_uses_wire_names() {
        let draw: Draw = serde_json::from_value(json!({
            "id": 2,
            "result1": "3-14-22",
            "totalBets": 5,
            "totalBetAmount": 250
        }))
        .unwrap();

        let value = serde_json::to_value(&draw).unwrap();
        assert_eq!(value["totalBets"], json!(5));
        assert_eq!(value["result1"], json!("3-14-22"));
        assert!(value.get("status").is_none());
    }
}
