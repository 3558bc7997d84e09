use serde::{Deserialize, Serialize};

use crate::models::RiskLevel;

/// Instrument leverage applied to raw price moves (500:1).
pub const LEVERAGE_FACTOR: f64 = 500.0;

const LOW_RISK_PERCENT: f64 = 1.0;
const MEDIUM_RISK_PERCENT: f64 = 2.0;
const HIGH_RISK_PERCENT: f64 = 3.0;

/// Leverage and per-tier account risk used to turn a price move into
/// account P/L. Mirrors the signal backend's own computation, so the
/// values are configuration rather than fixed law.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskModel {
    pub leverage_factor: f64,
    pub low_percent: f64,
    pub medium_percent: f64,
    pub high_percent: f64,
}

impl Default for RiskModel {
    fn default() -> Self {
        Self {
            leverage_factor: LEVERAGE_FACTOR,
            low_percent: LOW_RISK_PERCENT,
            medium_percent: MEDIUM_RISK_PERCENT,
            high_percent: HIGH_RISK_PERCENT,
        }
    }
}

impl RiskModel {
    /// Account percent risked per signal for the given tier.
    pub fn risk_percent(&self, level: RiskLevel) -> f64 {
        match level {
            RiskLevel::Low => self.low_percent,
            RiskLevel::Medium => self.medium_percent,
            RiskLevel::High => self.high_percent,
        }
    }

    /// Profit percent booked when a signal stops out: the full tier risk.
    pub fn stop_loss_percent(&self, level: RiskLevel) -> f64 {
        -self.risk_percent(level)
    }
}
