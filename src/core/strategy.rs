use serde::{Serialize, Serializer};
use std::fmt;
use thiserror::Error;

use crate::models::MAX_TP_LEVEL;

/// Number of allocation slots, one per TP level.
pub const STRATEGY_LEN: usize = MAX_TP_LEVEL as usize;

/// Allowed drift of the allocation sum from 1.0. Inputs arrive as rounded
/// percentages, so exact equality is too strict.
pub const SUM_EPSILON: f64 = 1e-6;

/// 50% at TP1, 20% at TP2, 10% each at TP3-TP5, nothing held for TP6.
pub const DEFAULT_STRATEGY_PERCENTAGES: [f64; STRATEGY_LEN] = [50.0, 20.0, 10.0, 10.0, 10.0, 0.0];

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("strategy needs exactly {expected} allocations, got {got}")]
    WrongLength { expected: usize, got: usize },

    #[error("allocation for TP{level} is not a finite number")]
    NotFinite { level: usize },

    #[error("allocation for TP{level} is {value}, must be between 0 and 1")]
    OutOfRange { level: usize, value: f64 },

    #[error("allocations sum to {sum:.6}, must total 1.0 (100%)")]
    BadSum { sum: f64 },
}

/// Validated partial-exit allocation: six fractions in `[0, 1]` summing to
/// 1.0. The only way to build one is through [`validate`], so holding a
/// `StrategyVector` proves the check already passed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrategyVector([f64; STRATEGY_LEN]);

impl StrategyVector {
    /// Validate allocations given as whole percentages (UI input, sums to 100).
    pub fn from_percentages(percentages: &[f64]) -> Result<Self, ValidationError> {
        let fractions: Vec<f64> = percentages.iter().map(|p| p / 100.0).collect();
        validate(&fractions)
    }

    /// Fraction of the position closed at leg `i` (0 is TP1).
    pub fn allocation(&self, i: usize) -> f64 {
        self.0.get(i).copied().unwrap_or(0.0)
    }

    pub fn percentages(&self) -> [f64; STRATEGY_LEN] {
        self.0.map(|f| f * 100.0)
    }
}

impl Default for StrategyVector {
    fn default() -> Self {
        StrategyVector(DEFAULT_STRATEGY_PERCENTAGES.map(|p| p / 100.0))
    }
}

impl fmt::Display for StrategyVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .percentages()
            .iter()
            .enumerate()
            .map(|(i, p)| format!("TP{} {:.0}%", i + 1, p))
            .collect();
        write!(f, "{}", parts.join(" / "))
    }
}

impl Serialize for StrategyVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

/// Check a proposed allocation vector. Has no side effects; a rejected
/// vector simply never reaches the engine.
pub fn validate(fractions: &[f64]) -> Result<StrategyVector, ValidationError> {
    if fractions.len() != STRATEGY_LEN {
        return Err(ValidationError::WrongLength {
            expected: STRATEGY_LEN,
            got: fractions.len(),
        });
    }

    let mut out = [0.0; STRATEGY_LEN];
    for (i, &value) in fractions.iter().enumerate() {
        if !value.is_finite() {
            return Err(ValidationError::NotFinite { level: i + 1 });
        }
        if !(0.0..=1.0).contains(&value) {
            return Err(ValidationError::OutOfRange {
                level: i + 1,
                value,
            });
        }
        out[i] = value;
    }

    let sum: f64 = out.iter().sum();
    if (sum - 1.0).abs() > SUM_EPSILON {
        return Err(ValidationError::BadSum { sum });
    }

    Ok(StrategyVector(out))
}
