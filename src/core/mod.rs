pub mod recalc;
pub mod risk;
pub mod strategy;

pub use recalc::{recalc, RecalcEngine};
pub use risk::{RiskModel, LEVERAGE_FACTOR};
pub use strategy::{validate, StrategyVector, ValidationError, DEFAULT_STRATEGY_PERCENTAGES};
