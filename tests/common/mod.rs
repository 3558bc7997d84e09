use std::path::PathBuf;

/// Dashboard-style export: nine rows covering every outcome shape,
/// including a stop-out, a pending row, a row with a gap in its TP
/// ladder, and one with a broken entry price.
pub const HISTORY_JSON: &str = r#"{
  "status": "success",
  "data": {
    "total_count": 9,
    "signals": [
      {"signal_number": 101, "symbol": "NAS100", "action": "BUY", "entry_price": 100,
       "tp1": 101, "tp2": 102, "tp3": 103, "outcome": "TP3 Hit",
       "risk_level": "MEDIUM", "created_at": "2024-02-05 09:15:00"},
      {"signal_number": 102, "symbol": "XAUUSD", "action": "SELL", "entry_price": 2030.5,
       "stop_loss": 2034.0, "tp1": 2027.0, "tp2": 2024.0, "tp3": 2020.0,
       "tp_hits": [], "risk_level": "HIGH", "created_at": "2024-02-01 14:00:00"},
      {"signal_number": 103, "symbol": "EURUSD", "action": "BUY", "entry_price": 1.0850,
       "tp1": 1.0870, "tp2": 1.0890, "tp3": 1.0910, "tp4": 1.0930, "tp5": 1.0950, "tp6": 1.0970,
       "tp_hits": [1, 2, 3, 4, 5, 6], "risk_level": "LOW", "created_at": "2024-02-07T08:00:00Z"},
      {"signal_number": 104, "symbol": "USDJPY", "action": "SELL", "entry_price": 148.20,
       "tp1": 148.00, "tp2": 147.80, "outcome": "Pending", "created_at": "2024-02-08 11:30:00"},
      {"signal_number": 105, "symbol": "BTCUSD", "action": "BUY", "entry_price": "42000",
       "tp1": 42200, "tp2": null, "tp3": 42600, "tp_hits": [1, 3]},
      {"signal_number": 106, "symbol": "GBPUSD", "action": "BUY", "entry_price": 0,
       "tp1": 1.2650, "outcome": "TP1 Hit", "created_at": "2024-02-02 10:00:00"},
      {"signal_number": 107, "symbol": "XAUUSD", "action": "BUY", "entry_price": 2010.0,
       "tp1": 2013.0, "tp2": 2016.0, "outcome": "TP2 Hit", "risk_level": "HIGH",
       "created_at": "2024-02-05 09:15:00"},
      {"signal_number": 108, "symbol": "US100", "action": "SELL", "entry_price": 17500,
       "stop_loss": 17560, "outcome": "SL Hit", "risk_level": "LOW",
       "created_at": "2024-02-06 16:45:00"},
      {"signal_number": 109, "symbol": "XAUUSD", "action": "BUY", "entry_price": 2000.0,
       "tp1": 2002.0, "outcome": "mystery", "created_at": "not a date"}
    ]
  }
}"#;

/// Rows as the live backend exports them: profit already booked and a
/// breakdown whose allocations are named `partial_exit_percent`.
pub const BOOKED_HISTORY_JSON: &str = r#"{
  "status": "success",
  "data": {
    "signals": [
      {"signal_number": 201, "symbol": "NAS100", "action": "BUY", "entry_price": 100,
       "tp1": 101, "tp2": 102, "outcome": "TP2 Hit", "risk_level": "MEDIUM",
       "profit_percent": 14.0, "created_at": "2024-03-04 10:00:00",
       "tp_breakdown": [
         {"tp_level": 1, "price": 101.0, "pips": 1.0, "partial_exit_percent": 50, "profit_percent": 5.0},
         {"tp_level": 2, "price": 102.0, "pips": 2.0, "partial_exit_percent": 20, "profit_percent": 4.0}
       ]},
      {"signal_number": 202, "symbol": "XAUUSD", "action": "SELL", "entry_price": 2030.0,
       "stop_loss": 2033.0, "outcome": "SL Hit", "risk_level": "LOW",
       "profit_percent": -1.0, "created_at": "2024-03-05 10:00:00"}
    ]
  }
}"#;

/// Write the standard fixture to a per-process temp file and return its path.
pub fn write_history_fixture(name: &str) -> PathBuf {
    write_fixture(name, HISTORY_JSON)
}

pub fn write_fixture(name: &str, content: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("signal_history_integ_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}
