use serde::{Deserialize, Serialize};

use crate::models::Signal;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquityPoint {
    pub label: String,
    pub cumulative_pl: f64,
}

/// Signals ordered by entry date, oldest first. Undated signals sort
/// before every dated one; ties keep their batch order.
pub fn chronological(signals: &[Signal]) -> Vec<&Signal> {
    let mut ordered: Vec<&Signal> = signals.iter().collect();
    ordered.sort_by_key(|s| s.entry_date);
    ordered
}

/// Build the cumulative P/L curve for a batch. Always rebuilt in full;
/// one point per signal.
pub fn build(signals: &[Signal]) -> Vec<EquityPoint> {
    let mut cumulative = 0.0;
    chronological(signals)
        .into_iter()
        .enumerate()
        .map(|(i, s)| {
            cumulative += s.profit_percent;
            let label = match s.entry_date {
                Some(ts) => ts.format("%b %d").to_string(),
                None => format!("#{}", i + 1),
            };
            EquityPoint {
                label,
                cumulative_pl: cumulative,
            }
        })
        .collect()
}

/// Largest peak-to-trough fall of the curve, in P/L percentage points.
/// The curve is measured from a flat start at 0.
pub fn max_drawdown(curve: &[EquityPoint]) -> f64 {
    let mut peak = 0.0_f64;
    let mut max_dd = 0.0_f64;
    for point in curve {
        peak = peak.max(point.cumulative_pl);
        max_dd = max_dd.max(peak - point.cumulative_pl);
    }
    max_dd
}
