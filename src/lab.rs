use anyhow::Result;
use std::sync::Arc;
use tracing::{info, warn};

use crate::core::recalc::RecalcEngine;
use crate::core::strategy::{StrategyVector, ValidationError};
use crate::history::HistoryReport;
use crate::models::Signal;
use crate::store::SignalStore;

/// The canonical signal batch as fetched from the store. Immutable and
/// cheap to clone; every recalculation starts from here.
#[derive(Debug, Clone)]
pub struct Baseline {
    signals: Arc<[Signal]>,
}

impl Baseline {
    pub fn new(signals: Vec<Signal>) -> Self {
        Self {
            signals: signals.into(),
        }
    }

    pub fn signals(&self) -> &[Signal] {
        &self.signals
    }

    pub fn len(&self) -> usize {
        self.signals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }

    /// A fresh owned copy of the batch.
    pub fn snapshot(&self) -> Vec<Signal> {
        self.signals.to_vec()
    }
}

/// Fetch the baseline batch from a store.
pub async fn load_baseline(store: &mut dyn SignalStore) -> Result<Baseline> {
    let signals = store.load_signals().await?;
    info!("Baseline holds {} signals", signals.len());
    Ok(Baseline::new(signals))
}

/// Stateless recompute: baseline + strategy in, report out. Idempotent.
pub fn recompute(
    engine: &RecalcEngine,
    baseline: &Baseline,
    strategy: StrategyVector,
) -> HistoryReport {
    let signals = engine.recalc_batch(baseline.signals(), &strategy);
    HistoryReport::from_signals(strategy, signals)
}

/// Session state for interactive strategy edits.
///
/// Holds the baseline and the currently displayed report. A strategy that
/// fails validation leaves the displayed report untouched; the last
/// accepted strategy wins.
pub struct StrategyLab {
    engine: RecalcEngine,
    baseline: Baseline,
    default_strategy: StrategyVector,
    strategy: StrategyVector,
    current: HistoryReport,
}

impl StrategyLab {
    /// Starts out showing the baseline exactly as loaded.
    pub fn new(baseline: Baseline, engine: RecalcEngine, default_strategy: StrategyVector) -> Self {
        let current = HistoryReport::from_signals(default_strategy, baseline.snapshot());
        Self {
            engine,
            baseline,
            default_strategy,
            strategy: default_strategy,
            current,
        }
    }

    pub fn current(&self) -> &HistoryReport {
        &self.current
    }

    pub fn strategy(&self) -> StrategyVector {
        self.strategy
    }

    pub fn baseline(&self) -> &Baseline {
        &self.baseline
    }

    /// Recompute from the baseline under an already validated strategy.
    /// The default strategy always shows the baseline as loaded.
    pub fn apply(&mut self, strategy: StrategyVector) -> &HistoryReport {
        if strategy == self.default_strategy {
            info!("Default strategy {} -> baseline as loaded", strategy);
            return self.reset();
        }
        self.current = recompute(&self.engine, &self.baseline, strategy);
        self.strategy = strategy;
        info!(
            "Applied {} -> total P/L {:+.2}%",
            strategy, self.current.summary.total_pl_percent
        );
        &self.current
    }

    /// Validate UI percentages, then apply. On rejection the previous
    /// report stays in place and the error is returned for display.
    pub fn apply_percentages(
        &mut self,
        percentages: &[f64],
    ) -> Result<&HistoryReport, ValidationError> {
        match StrategyVector::from_percentages(percentages) {
            Ok(strategy) => Ok(self.apply(strategy)),
            Err(e) => {
                warn!("Strategy {:?} rejected: {}", percentages, e);
                Err(e)
            }
        }
    }

    /// Back to the baseline batch and the default strategy.
    pub fn reset(&mut self) -> &HistoryReport {
        self.strategy = self.default_strategy;
        self.current = HistoryReport::from_signals(self.default_strategy, self.baseline.snapshot());
        &self.current
    }

    /// Swap in a freshly fetched baseline. The current strategy is
    /// reapplied to it; a default-strategy view shows the new baseline as is.
    pub fn replace_baseline(&mut self, baseline: Baseline) -> &HistoryReport {
        info!(
            "Baseline replaced: {} -> {} signals",
            self.baseline.len(),
            baseline.len()
        );
        self.baseline = baseline;
        self.apply(self.strategy)
    }
}
