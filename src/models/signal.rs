use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Action, Outcome, RiskLevel, MAX_TP_LEVEL};

/// One partial exit of a signal's take-profit ladder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TpLeg {
    pub tp_level: u8,
    pub price: f64,
    #[serde(default)]
    pub pips: f64,
    /// Share of the position closed at this level, as a whole percent.
    #[serde(default, alias = "partial_exit_percent")]
    pub allocation_percent: u32,
    /// Contribution of this leg to the signal's profit_percent.
    #[serde(default)]
    pub profit_percent: f64,
}

/// A historical trade signal. Instances in the baseline batch are never
/// mutated; recalculation produces new values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    pub signal_number: u64,
    pub symbol: String,
    pub action: Action,
    pub entry_price: Option<f64>,
    #[serde(default)]
    pub stop_loss: Option<f64>,
    /// TP ladder, index 0 is TP1.
    pub tp: [Option<f64>; MAX_TP_LEVEL as usize],
    #[serde(default)]
    pub outcome: Outcome,
    #[serde(default)]
    pub risk_level: RiskLevel,
    #[serde(default)]
    pub entry_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_reentry: bool,
    #[serde(default)]
    pub profit_percent: f64,
    #[serde(default)]
    pub pips: f64,
    #[serde(default)]
    pub tp_breakdown: Option<Vec<TpLeg>>,
}

impl Signal {
    pub fn new(signal_number: u64, symbol: &str, action: Action, entry_price: f64) -> Self {
        Self {
            signal_number,
            symbol: symbol.to_string(),
            action,
            entry_price: Some(entry_price),
            stop_loss: None,
            tp: [None; MAX_TP_LEVEL as usize],
            outcome: Outcome::Pending,
            risk_level: RiskLevel::default(),
            entry_date: None,
            is_reentry: false,
            profit_percent: 0.0,
            pips: 0.0,
            tp_breakdown: None,
        }
    }

    /// Usable price of TP `level` (1-based). Zero and negative prices
    /// count as absent.
    pub fn tp_price(&self, level: u8) -> Option<f64> {
        let idx = usize::from(level).checked_sub(1)?;
        self.tp
            .get(idx)
            .copied()
            .flatten()
            .filter(|p| p.is_finite() && *p > 0.0)
    }

    /// Entry price, if it can serve as a base for a percentage move.
    pub fn valid_entry(&self) -> Option<f64> {
        self.entry_price.filter(|p| p.is_finite() && *p > 0.0)
    }

    /// Price the signal was closed at: the highest TP hit, or the stop.
    pub fn exit_price(&self) -> Option<f64> {
        match self.outcome {
            Outcome::TakeProfit(n) => self.tp_price(n),
            Outcome::StopLoss => self.stop_loss.filter(|p| *p > 0.0),
            Outcome::Pending => None,
        }
    }

    pub fn highest_tp(&self) -> u8 {
        self.outcome.tp_level().unwrap_or(0)
    }
}
