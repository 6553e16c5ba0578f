//! Storage layer for daily metrics.

mod metrics_store;

pub use metrics_store::DailyMetricsStore;
