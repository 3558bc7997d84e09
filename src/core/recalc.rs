use tracing::debug;

use crate::core::risk::RiskModel;
use crate::core::strategy::StrategyVector;
use crate::models::pips::pips_between;
use crate::models::{Signal, TpLeg};

/// Recomputes signal profit under a partial take-profit allocation.
///
/// Every call is pure: the input signal is cloned, never touched, and the
/// same `(signal, strategy)` pair always yields the same result. Records
/// that cannot be priced (stop-outs, pending, bad entry) come back
/// unchanged instead of failing the batch.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecalcEngine {
    model: RiskModel,
}

impl RecalcEngine {
    pub fn new(model: RiskModel) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &RiskModel {
        &self.model
    }

    pub fn recalc(&self, signal: &Signal, strategy: &StrategyVector) -> Signal {
        // SL and pending profits are owned by the signal source
        let Some(hit) = signal.outcome.tp_level() else {
            return signal.clone();
        };

        let risk_percent = self.model.risk_percent(signal.risk_level);

        let Some(entry) = signal.valid_entry() else {
            debug!(
                "Signal #{} {}: no usable entry price, left unchanged",
                signal.signal_number, signal.symbol
            );
            return signal.clone();
        };

        let mut out = signal.clone();
        let mut total_profit = 0.0;

        for i in 0..usize::from(hit) {
            let level = (i + 1) as u8;

            // A missing price forfeits the leg; its weight is not moved
            // to the remaining legs.
            let Some(tp_price) = signal.tp_price(level) else {
                debug!(
                    "Signal #{} {}: TP{} has no price, leg skipped",
                    signal.signal_number, signal.symbol, level
                );
                continue;
            };

            let price_move_percent = (tp_price - entry).abs() / entry * 100.0;
            let leveraged_move = price_move_percent * self.model.leverage_factor;
            let allocation = strategy.allocation(i);
            let leg_profit = leveraged_move * allocation * (risk_percent / 100.0);

            total_profit += leg_profit;

            if let Some(leg) = out
                .tp_breakdown
                .as_mut()
                .and_then(|legs| legs.iter_mut().find(|l| l.tp_level == level))
            {
                leg.profit_percent = leg_profit;
                leg.allocation_percent = (allocation * 100.0).round() as u32;
            }
        }

        out.profit_percent = total_profit;
        out
    }

    /// Recalculate a whole batch. Each record is independent of the others.
    pub fn recalc_batch(&self, signals: &[Signal], strategy: &StrategyVector) -> Vec<Signal> {
        signals.iter().map(|s| self.recalc(s, strategy)).collect()
    }

    /// Like [`recalc`](Self::recalc), but seeds a per-leg breakdown first
    /// when the signal has none.
    pub fn recalc_with_breakdown(&self, signal: &Signal, strategy: &StrategyVector) -> Signal {
        if signal.tp_breakdown.is_some() || signal.outcome.tp_level().is_none() {
            return self.recalc(signal, strategy);
        }

        let mut seeded = signal.clone();
        seeded.tp_breakdown = Some(ladder_legs(signal));
        self.recalc(&seeded, strategy)
    }
}

/// Recalculate with the default risk model.
pub fn recalc(signal: &Signal, strategy: &StrategyVector) -> Signal {
    RecalcEngine::default().recalc(signal, strategy)
}

/// Empty legs for every priced TP up to the level hit.
fn ladder_legs(signal: &Signal) -> Vec<TpLeg> {
    let hit = signal.highest_tp();
    (1..=hit)
        .filter_map(|level| {
            let price = signal.tp_price(level)?;
            let pips = signal
                .valid_entry()
                .map(|entry| pips_between(&signal.symbol, signal.action, entry, price))
                .unwrap_or(0.0);
            Some(TpLeg {
                tp_level: level,
                price,
                pips,
                allocation_percent: 0,
                profit_percent: 0.0,
            })
        })
        .collect()
}
