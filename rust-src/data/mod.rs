//! Data access layer for daily metrics files.

mod jsonl_parser;

#[allow(unused_imports)]
pub use jsonl_parser::{load_store, parse_metrics_file};
