pub mod equity;
pub mod report;
pub mod summary;

pub use equity::{EquityPoint, build as build_equity_curve};
pub use report::HistoryReport;
pub use summary::{summarize, SummaryStatistics, TpDistribution};
