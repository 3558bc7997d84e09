use serde::Serialize;

use crate::core::strategy::StrategyVector;
use crate::history::equity::{self, EquityPoint};
use crate::history::summary::{summarize, SummaryStatistics};
use crate::models::{Outcome, Signal, MAX_TP_LEVEL};

/// Everything the presentation layer needs for one strategy: the
/// recalculated batch, its statistics and its equity curve.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryReport {
    pub strategy: StrategyVector,
    pub signals: Vec<Signal>,
    pub summary: SummaryStatistics,
    pub equity_curve: Vec<EquityPoint>,
    pub max_drawdown: f64,
}

impl HistoryReport {
    pub fn from_signals(strategy: StrategyVector, signals: Vec<Signal>) -> Self {
        let summary = summarize(&signals);
        let equity_curve = equity::build(&signals);
        let max_drawdown = equity::max_drawdown(&equity_curve);

        HistoryReport {
            strategy,
            signals,
            summary,
            equity_curve,
            max_drawdown,
        }
    }

    pub fn print_summary(&self) {
        let s = &self.summary;

        println!("\n{}", "=".repeat(70));
        println!("  SIGNAL HISTORY");
        println!("{}", "=".repeat(70));
        println!("  Strategy:    {}", self.strategy);
        println!();
        println!("  SIGNALS");
        println!("  ───────────────────────────────────");
        println!("  Total:       {}", s.total_signals);
        println!(
            "  Win/Loss:    {} / {}",
            s.winning_signals, s.losing_signals
        );
        println!("  Pending:     {}", s.pending_signals);
        println!("  Win Rate:    {:.1}%", s.win_rate);
        println!();
        println!("  PERFORMANCE");
        println!("  ───────────────────────────────────");
        println!("  Total P/L:   {:+.2}%", s.total_pl_percent);
        println!("  Total Pips:  {:+.1}", s.total_pips);
        println!("  Max DD:      {:.2}%", self.max_drawdown);
        println!();
        println!("  OUTCOMES");
        println!("  ───────────────────────────────────");
        println!("  {:>4}: {}", "SL", s.tp_distribution.sl);
        for level in 1..=MAX_TP_LEVEL {
            println!(
                "  {:>4}: {}",
                format!("TP{}", level),
                s.tp_distribution.count(Outcome::TakeProfit(level))
            );
        }

        if !self.equity_curve.is_empty() {
            println!();
            println!("  EQUITY CURVE");
            println!("  ───────────────────────────────────");
            for (point, signal) in self
                .equity_curve
                .iter()
                .zip(equity::chronological(&self.signals))
            {
                println!(
                    "  {:>7}  #{:<5} {:<8} {:<8} {:+8.2}%  cum {:+9.2}%",
                    point.label,
                    signal.signal_number,
                    signal.symbol,
                    signal.outcome.to_string(),
                    signal.profit_percent,
                    point.cumulative_pl
                );
            }
        }

        println!("{}", "=".repeat(70));
    }
}
