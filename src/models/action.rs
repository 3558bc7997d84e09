use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Action {
    Buy,
    Sell,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Buy => "BUY",
            Action::Sell => "SELL",
        }
    }

    pub fn from_str_loose(s: &str) -> Option<Action> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BUY" | "LONG" => Some(Action::Buy),
            "SELL" | "SHORT" => Some(Action::Sell),
            _ => None,
        }
    }

    /// +1 for buys, -1 for sells. Multiplies a raw price delta into a
    /// favourable-is-positive move.
    pub fn sign(&self) -> f64 {
        match self {
            Action::Buy => 1.0,
            Action::Sell => -1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    #[default]
    Medium,
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "LOW"),
            RiskLevel::Medium => write!(f, "MEDIUM"),
            RiskLevel::High => write!(f, "HIGH"),
        }
    }
}

impl RiskLevel {
    /// Unknown or empty tiers resolve to the default tier (MEDIUM).
    pub fn from_str_loose(s: &str) -> RiskLevel {
        match s.trim().to_ascii_uppercase().as_str() {
            "LOW" => RiskLevel::Low,
            "HIGH" => RiskLevel::High,
            _ => RiskLevel::Medium,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_parses_case_insensitively() {
        assert_eq!(Action::from_str_loose(" buy "), Some(Action::Buy));
        assert_eq!(Action::from_str_loose("SELL"), Some(Action::Sell));
        assert_eq!(Action::from_str_loose("hold"), None);
    }

    #[test]
    fn unknown_risk_level_is_medium() {
        assert_eq!(RiskLevel::from_str_loose("low"), RiskLevel::Low);
        assert_eq!(RiskLevel::from_str_loose("HIGH"), RiskLevel::High);
        assert_eq!(RiskLevel::from_str_loose(""), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_str_loose("EXTREME"), RiskLevel::Medium);
        assert_eq!(RiskLevel::default(), RiskLevel::Medium);
    }

    #[test]
    fn wire_names_are_uppercase() {
        assert_eq!(serde_json::to_string(&Action::Sell).unwrap(), "\"SELL\"");
        assert_eq!(serde_json::to_string(&RiskLevel::High).unwrap(), "\"HIGH\"");
    }
}
