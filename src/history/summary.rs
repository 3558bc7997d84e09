use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::history::equity::chronological;
use crate::models::{Outcome, Signal, MAX_TP_LEVEL};

/// Count of signals per final outcome: SL and TP1..TP6.
/// Pending signals belong to no bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TpDistribution {
    pub sl: usize,
    pub tp: [usize; MAX_TP_LEVEL as usize],
}

impl TpDistribution {
    /// Bucket one outcome. Returns false for outcomes with no bucket.
    pub fn record(&mut self, outcome: Outcome) -> bool {
        match outcome {
            Outcome::StopLoss => self.sl += 1,
            Outcome::TakeProfit(n) => match usize::from(n)
                .checked_sub(1)
                .and_then(|i| self.tp.get_mut(i))
            {
                Some(slot) => *slot += 1,
                None => return false,
            },
            Outcome::Pending => return false,
        }
        true
    }

    pub fn count(&self, outcome: Outcome) -> usize {
        match outcome {
            Outcome::StopLoss => self.sl,
            Outcome::TakeProfit(n) => usize::from(n)
                .checked_sub(1)
                .and_then(|i| self.tp.get(i))
                .copied()
                .unwrap_or(0),
            Outcome::Pending => 0,
        }
    }

    pub fn total(&self) -> usize {
        self.sl + self.tp.iter().sum::<usize>()
    }
}

impl Serialize for TpDistribution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1 + self.tp.len()))?;
        map.serialize_entry("SL", &self.sl)?;
        for (i, count) in self.tp.iter().enumerate() {
            map.serialize_entry(&format!("TP{}", i + 1), count)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SummaryStatistics {
    pub total_signals: usize,
    pub winning_signals: usize,
    pub losing_signals: usize,
    pub pending_signals: usize,
    pub win_rate: f64,
    pub total_pl_percent: f64,
    pub total_pips: f64,
    pub tp_distribution: TpDistribution,
}

/// Fold a batch into summary statistics.
///
/// A win is anything that did not stop out. P/L is summed in chronological
/// order so the total matches the last point of the equity curve exactly.
pub fn summarize(signals: &[Signal]) -> SummaryStatistics {
    let total = signals.len();
    let mut stats = SummaryStatistics {
        total_signals: total,
        ..Default::default()
    };

    for s in chronological(signals) {
        if s.outcome.is_stop_loss() {
            stats.losing_signals += 1;
        } else {
            stats.winning_signals += 1;
        }
        if !stats.tp_distribution.record(s.outcome) {
            stats.pending_signals += 1;
        }
        stats.total_pl_percent += s.profit_percent;
        stats.total_pips += s.pips;
    }

    stats.win_rate = if total > 0 {
        stats.winning_signals as f64 / total as f64 * 100.0
    } else {
        0.0
    };

    stats
}
