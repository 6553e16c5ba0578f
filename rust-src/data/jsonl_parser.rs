//! JSONL reader for daily metrics files.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::models::DailyMetrics;
use crate::storage::DailyMetricsStore;


/// Parse a JSONL file of daily metrics, one record per line.
///
/// Blank lines are ignored and malformed lines are skipped with a warning.
pub fn parse_metrics_file(file_path: &Path) -> Result<Vec<DailyMetrics>> {
    let file = File::open(file_path)
        .with_context(|| format!("Failed to open file: {}", file_path.display()))?;

    let reader = BufReader::new(file);
    let mut records = Vec::new();

    for (line_num, line_result) in reader.lines().enumerate() {
        let line = match line_result {
            Ok(l) => l,
            Err(e) => {
                warn!(
                    "Error reading line {} in {}: {}",
                    line_num + 1,
                    file_path.display(),
                    e
                );
                continue;
            }
        };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match serde_json::from_str::<DailyMetrics>(line) {
            Ok(record) => records.push(record),
            Err(e) => {
                warn!(
                    "Skipping malformed record at {}:{}: {}",
                    file_path.display(),
                    line_num + 1,
                    e
                );
            }
        }
    }

    debug!(path = %file_path.display(), count = records.len(), "parsed metrics file");
    Ok(records)
}


/// Build a store from metrics files, read in order.
///
/// A later record for the same day replaces an earlier one, across files as
/// well as within one. Files that cannot be read are skipped with a warning.
pub fn load_store(file_paths: &[PathBuf]) -> DailyMetricsStore {
    let mut store = DailyMetricsStore::new();

    for file_path in file_paths {
        match parse_metrics_file(file_path) {
            Ok(records) => store.extend(records),
            Err(e) => warn!("Error loading {}: {:#}", file_path.display(), e),
        }
    }

    store
}
