//! In-memory store of daily metrics keyed by day.

use std::collections::HashMap;

use chrono::{Days, NaiveDate};
use tracing::debug;

use crate::config::TRAILING_WEEK_DAYS;
use crate::models::{day_key, DailyMetrics};


/// Holds at most one `DailyMetrics` per day key for the lifetime of the value.
///
/// Writes take `&mut self` and there is no internal locking. Callers sharing
/// a store across threads wrap it themselves.
#[derive(Debug, Clone, Default)]
pub struct DailyMetricsStore {
    records: HashMap<String, DailyMetrics>,
}


impl DailyMetricsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or fully replace the record for `record.day`.
    pub fn upsert(&mut self, record: DailyMetrics) {
        debug!(day = %record.day, steps = record.steps, "upsert daily metrics");
        self.records.insert(record.day.clone(), record);
    }

    /// Stored record for `day`, if any.
    pub fn get(&self, day: &str) -> Option<DailyMetrics> {
        self.records.get(day).cloned()
    }

    /// Whether a record is stored for `day`.
    pub fn contains_day(&self, day: &str) -> bool {
        self.records.contains_key(day)
    }

    /// Every stored record. Order is unspecified.
    pub fn get_all(&self) -> Vec<DailyMetrics> {
        self.records.values().cloned().collect()
    }

    /// The 7 days ending at `reference_day`, newest first.
    ///
    /// Days with nothing stored come back as `DailyMetrics::default_for_day`
    /// and are not written to the store. Days before `NaiveDate::MIN` cannot
    /// be represented, so the window is cut short there.
    pub fn get_trailing_week(&self, reference_day: NaiveDate) -> Vec<DailyMetrics> {
        (0..TRAILING_WEEK_DAYS as u64)
            .map_while(|i| reference_day.checked_sub_days(Days::new(i)))
            .map(|date| {
                let day = day_key(date);
                self.get(&day)
                    .unwrap_or_else(|| DailyMetrics::default_for_day(day))
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}


impl Extend<DailyMetrics> for DailyMetricsStore {
    fn extend<I: IntoIterator<Item = DailyMetrics>>(&mut self, iter: I) {
        for record in iter {
            self.upsert(record);
        }
    }
}


impl FromIterator<DailyMetrics> for DailyMetricsStore {
    fn from_iter<I: IntoIterator<Item = DailyMetrics>>(iter: I) -> Self {
        let mut store = Self::new();
        store.extend(iter);
        store
    }
}
