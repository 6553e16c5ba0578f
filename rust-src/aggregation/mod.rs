//! Aggregation layer for weekly statistics.

mod weekly_summary;

pub use weekly_summary::{summarize_week, WeeklySummary};
