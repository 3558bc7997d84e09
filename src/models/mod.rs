pub mod action;
pub mod outcome;
pub mod pips;
pub mod signal;

pub use action::{Action, RiskLevel};
pub use outcome::{Outcome, MAX_TP_LEVEL};
pub use signal::{Signal, TpLeg};
