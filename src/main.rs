use anyhow::{Context, Result};
use tracing::warn;
use tracing_subscriber::{fmt, EnvFilter};

use signal_history::config::{parse_percentages, Config};
use signal_history::core::RecalcEngine;
use signal_history::lab::{load_baseline, StrategyLab};
use signal_history::store::JsonSignalStore;

/// Usage: signal-history [PERCENTAGES] [REPORT_JSON]
///
/// PERCENTAGES is six comma-separated allocations summing to 100,
/// e.g. `40,30,10,10,5,5`. Without it the baseline is shown.
#[tokio::main]
async fn main() -> Result<()> {
    let cfg = Config::from_env();

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .init();

    let args: Vec<String> = std::env::args().collect();

    let engine = RecalcEngine::new(cfg.risk);
    let default_strategy = cfg
        .baseline_strategy()
        .context("DEFAULT_STRATEGY is not a valid allocation")?;

    let mut store = JsonSignalStore::new(&cfg.signals_file, engine, default_strategy);
    let baseline = load_baseline(&mut store).await?;
    let mut lab = StrategyLab::new(baseline, engine, default_strategy);

    if let Some(raw) = args.get(1) {
        match parse_percentages(raw) {
            Some(percentages) => {
                if let Err(e) = lab.apply_percentages(&percentages) {
                    println!("Strategy rejected ({}), showing baseline", e);
                }
            }
            None => warn!("Could not parse strategy {:?}, showing baseline", raw),
        }
    }

    let report = lab.current();
    report.print_summary();

    if let Some(path) = args.get(2) {
        let json = serde_json::to_string_pretty(report)?;
        std::fs::write(path, json).with_context(|| format!("failed to write {}", path))?;
        println!("\nReport saved to: {}", path);
    }

    Ok(())
}
