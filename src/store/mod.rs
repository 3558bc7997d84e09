pub mod json;
pub mod record;

pub use json::JsonSignalStore;
pub use record::SignalRecord;

use anyhow::Result;
use async_trait::async_trait;

use crate::models::Signal;

/// Source of the canonical signal batch. Fetched once per session; the
/// result becomes the immutable baseline.
#[async_trait]
pub trait SignalStore: Send + Sync {
    async fn load_signals(&mut self) -> Result<Vec<Signal>>;
}

/// A store that hands out a fixed batch.
#[derive(Debug, Clone, Default)]
pub struct MemorySignalStore {
    signals: Vec<Signal>,
}

impl MemorySignalStore {
    pub fn new(signals: Vec<Signal>) -> Self {
        Self { signals }
    }
}

#[async_trait]
impl SignalStore for MemorySignalStore {
    async fn load_signals(&mut self) -> Result<Vec<Signal>> {
        Ok(self.signals.clone())
    }
}
