use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::core::recalc::RecalcEngine;
use crate::core::strategy::StrategyVector;
use crate::models::Signal;
use crate::store::record::SignalRecord;
use crate::store::SignalStore;

/// A [`SignalStore`] backed by a JSON export of the signal history.
///
/// Accepts a bare array of records or the dashboard envelope
/// (`{"signals": [...]}` or `{"data": {"signals": [...]}}`). A record that
/// cannot be decoded is logged and skipped; it never fails the load.
pub struct JsonSignalStore {
    path: PathBuf,
    engine: RecalcEngine,
    strategy: StrategyVector,
}

impl JsonSignalStore {
    /// `engine` and `strategy` price records that arrive without a profit.
    pub fn new(path: impl AsRef<Path>, engine: RecalcEngine, strategy: StrategyVector) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            engine,
            strategy,
        }
    }

    /// Decode a JSON document into baseline signals.
    pub fn parse(&self, content: &str) -> Result<Vec<Signal>> {
        let doc: Value = serde_json::from_str(content).context("signal history is not valid JSON")?;
        let rows = match extract_rows(doc) {
            Some(rows) => rows,
            None => bail!("no signal array found in {}", self.path.display()),
        };

        let mut signals = Vec::with_capacity(rows.len());
        for (i, row) in rows.into_iter().enumerate() {
            match serde_json::from_value::<SignalRecord>(row) {
                Ok(record) => signals.push(record.into_signal(i, &self.engine, &self.strategy)),
                Err(e) => warn!("Skipping signal record {}: {}", i, e),
            }
        }
        Ok(signals)
    }
}

#[async_trait]
impl SignalStore for JsonSignalStore {
    async fn load_signals(&mut self) -> Result<Vec<Signal>> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        let signals = self.parse(&content)?;
        info!("Loaded {} signals from {}", signals.len(), self.path.display());
        Ok(signals)
    }
}

fn extract_rows(doc: Value) -> Option<Vec<Value>> {
    match doc {
        Value::Array(rows) => Some(rows),
        Value::Object(mut obj) => match obj.remove("signals") {
            Some(Value::Array(rows)) => Some(rows),
            _ => obj.remove("data").and_then(extract_rows),
        },
        _ => None,
    }
}
