use serde::{Deserialize, Serialize};
use std::fmt;

/// Highest take-profit level a signal can carry.
pub const MAX_TP_LEVEL: u8 = 6;

/// Decoded result of a signal. Raw labels are parsed once at ingestion,
/// everything downstream matches on this instead of on strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum Outcome {
    StopLoss,
    /// Highest TP level hit, always in `1..=MAX_TP_LEVEL`.
    TakeProfit(u8),
    #[default]
    Pending,
}

impl Outcome {
    /// Classify a raw outcome label such as `"TP3 Hit"`, `"SL Hit"` or
    /// `"Pending"`. Anything unrecognised is `Pending`; this never fails.
    pub fn classify(label: Option<&str>) -> Outcome {
        let Some(label) = label else {
            return Outcome::Pending;
        };

        let upper = label.trim().to_ascii_uppercase();
        let code = upper.strip_suffix("HIT").unwrap_or(&upper).trim_end();

        if code == "SL" {
            return Outcome::StopLoss;
        }

        code.strip_prefix("TP")
            .and_then(|n| n.trim().parse::<u8>().ok())
            .and_then(Outcome::take_profit)
            .unwrap_or(Outcome::Pending)
    }

    /// Classify from the list of TP levels announced for a signal.
    /// No announcements means the stop was hit first.
    pub fn from_tp_hits(hits: &[u8]) -> Outcome {
        if hits.is_empty() {
            return Outcome::StopLoss;
        }

        hits.iter()
            .copied()
            .filter_map(Outcome::take_profit)
            .max_by_key(|o| o.tp_level())
            .unwrap_or(Outcome::Pending)
    }

    /// `TakeProfit(level)` when `level` is a valid ladder position.
    pub fn take_profit(level: u8) -> Option<Outcome> {
        (1..=MAX_TP_LEVEL)
            .contains(&level)
            .then_some(Outcome::TakeProfit(level))
    }

    pub fn tp_level(&self) -> Option<u8> {
        match self {
            Outcome::TakeProfit(n) => Some(*n),
            _ => None,
        }
    }

    pub fn is_stop_loss(&self) -> bool {
        matches!(self, Outcome::StopLoss)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Outcome::Pending)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::StopLoss => write!(f, "SL Hit"),
            Outcome::TakeProfit(n) => write!(f, "TP{} Hit", n),
            Outcome::Pending => write!(f, "Pending"),
        }
    }
}

impl From<Option<String>> for Outcome {
    fn from(label: Option<String>) -> Self {
        Outcome::classify(label.as_deref())
    }
}

impl From<Outcome> for String {
    fn from(outcome: Outcome) -> Self {
        outcome.to_string()
    }
}
