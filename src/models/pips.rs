use crate::models::Action;

/// Price distance of one pip for the given instrument.
pub fn pip_size(symbol: &str) -> f64 {
    let s = symbol.to_ascii_uppercase();
    if s.contains("XAU") || s.contains("GOLD") {
        0.10
    } else if s.contains("BTC") || s.contains("BITCOIN") {
        1.0
    } else if s.contains("NAS") || s.contains("US100") || s.contains("NDX") {
        1.0
    } else if s.contains("JPY") {
        0.01
    } else {
        0.0001
    }
}

/// Signed pips from `entry` to `exit`, positive when the move favours the
/// trade direction. Rounded to one decimal.
pub fn pips_between(symbol: &str, action: Action, entry: f64, exit: f64) -> f64 {
    round1((exit - entry) * action.sign() / pip_size(symbol))
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pip_sizes_by_instrument() {
        assert!((pip_size("XAUUSD") - 0.10).abs() < 1e-12);
        assert!((pip_size("btcusd") - 1.0).abs() < 1e-12);
        assert!((pip_size("US100") - 1.0).abs() < 1e-12);
        assert!((pip_size("USDJPY") - 0.01).abs() < 1e-12);
        assert!((pip_size("EURUSD") - 0.0001).abs() < 1e-12);
    }

    #[test]
    fn sell_pips_are_positive_on_a_drop() {
        assert!((pips_between("XAUUSD", Action::Sell, 2000.0, 1995.0) - 50.0).abs() < 1e-9);
        assert!((pips_between("XAUUSD", Action::Buy, 2000.0, 1995.0) + 50.0).abs() < 1e-9);
    }
}
