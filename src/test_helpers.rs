use chrono::{DateTime, Duration, Utc};

use crate::config::Config;
use crate::core::risk::RiskModel;
use crate::models::{Action, Outcome, RiskLevel, Signal};

fn base_time() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2024-01-15T12:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

/// Entry 100 with a 1%-step TP ladder (101..106).
pub fn ladder_signal(outcome: Outcome, risk_level: RiskLevel) -> Signal {
    let mut s = Signal::new(1, "NAS100", Action::Buy, 100.0);
    s.tp = [
        Some(101.0),
        Some(102.0),
        Some(103.0),
        Some(104.0),
        Some(105.0),
        Some(106.0),
    ];
    s.stop_loss = Some(99.0);
    s.outcome = outcome;
    s.risk_level = risk_level;
    s
}

/// Entry 100, TP1-3 at 101/102/103, TP3 hit, MEDIUM risk.
/// Worth exactly 12% under a 50/20/10/10/10/0 allocation.
pub fn tp3_reference_signal() -> Signal {
    let mut s = ladder_signal(Outcome::TakeProfit(3), RiskLevel::Medium);
    s.tp[3] = None;
    s.tp[4] = None;
    s.tp[5] = None;
    s
}

/// Mixed batch of eight signals with dates `days` apart, shuffled out of
/// chronological order. One stop-out, one pending, one undated.
pub fn mixed_batch() -> Vec<Signal> {
    let base = base_time();
    let specs: [(u64, Outcome, RiskLevel, Option<i64>, f64); 8] = [
        (1, Outcome::TakeProfit(2), RiskLevel::Medium, Some(3), 7.0),
        (2, Outcome::StopLoss, RiskLevel::High, Some(1), -3.0),
        (3, Outcome::TakeProfit(6), RiskLevel::Low, Some(5), 10.5),
        (4, Outcome::Pending, RiskLevel::Medium, Some(2), 0.0),
        (5, Outcome::TakeProfit(1), RiskLevel::Medium, None, 5.0),
        (6, Outcome::TakeProfit(3), RiskLevel::High, Some(4), 18.0),
        (7, Outcome::StopLoss, RiskLevel::Low, Some(0), -1.0),
        (8, Outcome::TakeProfit(3), RiskLevel::Medium, Some(4), 12.0),
    ];

    specs
        .iter()
        .map(|&(n, outcome, risk, day, profit)| {
            let mut s = ladder_signal(outcome, risk);
            s.signal_number = n;
            s.entry_date = day.map(|d| base + Duration::days(d));
            s.profit_percent = profit;
            s
        })
        .collect()
}

/// A Config suitable for testing — default risk model, quiet logging.
pub fn default_test_config() -> Config {
    Config {
        signals_file: std::env::temp_dir()
            .join("signal_history_test.json")
            .to_string_lossy()
            .to_string(),
        risk: RiskModel::default(),
        default_strategy: crate::core::strategy::DEFAULT_STRATEGY_PERCENTAGES.to_vec(),
        log_level: "ERROR".to_string(),
    }
}
