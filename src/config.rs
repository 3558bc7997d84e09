use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::risk::RiskModel;
use crate::core::strategy::{StrategyVector, ValidationError, DEFAULT_STRATEGY_PERCENTAGES};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    // Signal source
    pub signals_file: String,

    // Leverage & risk tiers (mirrors the signal backend)
    pub risk: RiskModel,

    // Baseline partial-exit allocation, as percentages
    pub default_strategy: Vec<f64>,

    // Logging
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let env = |key: &str, default: &str| -> String {
            std::env::var(key).unwrap_or_else(|_| default.to_string())
        };

        let defaults = RiskModel::default();
        let risk = RiskModel {
            leverage_factor: non_negative(&env("LEVERAGE_FACTOR", "500"), defaults.leverage_factor),
            low_percent: non_negative(&env("RISK_LOW_PERCENT", "1"), defaults.low_percent),
            medium_percent: non_negative(&env("RISK_MEDIUM_PERCENT", "2"), defaults.medium_percent),
            high_percent: non_negative(&env("RISK_HIGH_PERCENT", "3"), defaults.high_percent),
        };

        let default_strategy = match std::env::var("DEFAULT_STRATEGY") {
            Ok(raw) => parse_percentages(&raw).unwrap_or_else(|| {
                warn!("DEFAULT_STRATEGY={:?} is not a list of numbers, using 50/20/10/10/10/0", raw);
                DEFAULT_STRATEGY_PERCENTAGES.to_vec()
            }),
            Err(_) => DEFAULT_STRATEGY_PERCENTAGES.to_vec(),
        };

        Config {
            signals_file: env("SIGNALS_FILE", "data/signal_history.json"),
            risk,
            default_strategy,
            log_level: env("LOG_LEVEL", "info"),
        }
    }

    /// The configured default allocation, validated.
    pub fn baseline_strategy(&self) -> Result<StrategyVector, ValidationError> {
        StrategyVector::from_percentages(&self.default_strategy)
    }
}

/// A finite, non-negative number, or `fallback`.
fn non_negative(raw: &str, fallback: f64) -> f64 {
    raw.trim()
        .parse()
        .ok()
        .filter(|v: &f64| v.is_finite() && *v >= 0.0)
        .unwrap_or(fallback)
}

/// Parse `"50,20,10,10,10,0"` (commas and/or whitespace) into percentages.
pub fn parse_percentages(raw: &str) -> Option<Vec<f64>> {
    raw.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|p| !p.is_empty())
        .map(|p| p.trim_end_matches('%').parse::<f64>().ok())
        .collect()
}
