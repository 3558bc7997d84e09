use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

use crate::core::recalc::RecalcEngine;
use crate::core::strategy::StrategyVector;
use crate::models::pips::pips_between;
use crate::models::{Action, Outcome, RiskLevel, Signal, TpLeg};

/// A signal row as delivered by the signal store. Every field is optional;
/// numbers may arrive as JSON numbers or numeric strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SignalRecord {
    #[serde(default)]
    pub signal_number: Option<u64>,
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub entry_price: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub stop_loss: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub tp1: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub tp2: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub tp3: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub tp4: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub tp5: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub tp6: Option<f64>,
    /// Outcome label, e.g. "TP3 Hit". Takes precedence over `tp_hits`.
    #[serde(default)]
    pub outcome: Option<String>,
    /// TP levels announced for the signal.
    #[serde(default)]
    pub tp_hits: Option<Vec<u8>>,
    #[serde(default)]
    pub risk_level: Option<String>,
    #[serde(default)]
    pub entry_date: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub is_reentry: Option<bool>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub profit_percent: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub pips: Option<f64>,
    #[serde(default)]
    pub tp_breakdown: Option<Vec<TpLeg>>,
}

impl SignalRecord {
    /// Decode a raw row into a baseline signal.
    ///
    /// The outcome is classified here, once. Rows that carry no profit get
    /// one derived: a stop-out books the full tier risk, a TP hit is priced
    /// by `engine` under `strategy`, pending books nothing.
    pub fn into_signal(
        self,
        position: usize,
        engine: &RecalcEngine,
        strategy: &StrategyVector,
    ) -> Signal {
        let outcome = match (&self.outcome, &self.tp_hits) {
            (Some(label), _) => Outcome::classify(Some(label)),
            (None, Some(hits)) => Outcome::from_tp_hits(hits),
            (None, None) => Outcome::Pending,
        };

        let action = self
            .action
            .as_deref()
            .and_then(Action::from_str_loose)
            .unwrap_or(Action::Buy);

        let date_raw = self.entry_date.as_deref().or(self.created_at.as_deref());
        let entry_date = date_raw.and_then(|raw| {
            let parsed = parse_timestamp(raw);
            if parsed.is_none() {
                debug!("Unparsable entry date {:?}, treating as undated", raw);
            }
            parsed
        });

        let mut signal = Signal {
            signal_number: self.signal_number.unwrap_or(position as u64 + 1),
            symbol: self.symbol,
            action,
            entry_price: self.entry_price,
            stop_loss: self.stop_loss,
            tp: [self.tp1, self.tp2, self.tp3, self.tp4, self.tp5, self.tp6],
            outcome,
            risk_level: self
                .risk_level
                .as_deref()
                .map(RiskLevel::from_str_loose)
                .unwrap_or_default(),
            entry_date,
            is_reentry: self.is_reentry.unwrap_or(false),
            profit_percent: 0.0,
            pips: 0.0,
            tp_breakdown: self.tp_breakdown,
        };

        signal.pips = self.pips.unwrap_or_else(|| signal_pips(&signal));

        match self.profit_percent {
            Some(profit) => signal.profit_percent = profit,
            None => match signal.outcome {
                Outcome::StopLoss => {
                    signal.profit_percent = engine.model().stop_loss_percent(signal.risk_level)
                }
                Outcome::TakeProfit(_) => {
                    signal = engine.recalc_with_breakdown(&signal, strategy);
                }
                Outcome::Pending => {}
            },
        }

        signal
    }
}

/// Pips from entry to the exit price implied by the outcome.
fn signal_pips(signal: &Signal) -> f64 {
    match (signal.valid_entry(), signal.exit_price()) {
        (Some(entry), Some(exit)) => pips_between(&signal.symbol, signal.action, entry, exit),
        _ => 0.0,
    }
}

/// RFC 3339, `YYYY-MM-DD HH:MM:SS` (assumed UTC) or a bare date.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n.as_f64(),
        Some(serde_json::Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}
