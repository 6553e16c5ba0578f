//! Trailing-week aggregation.

use chrono::NaiveDate;

use crate::config::TRAILING_WEEK_DAYS;
use crate::models::DailyMetrics;
use crate::storage::DailyMetricsStore;


/// Totals over the 7 days ending at `end_day`.
#[derive(Debug, Clone)]
pub struct WeeklySummary {
    pub start_day: String,
    pub end_day: String,
    /// Newest first, as returned by `get_trailing_week`.
    pub days: Vec<DailyMetrics>,
    pub total_steps: i64,
    pub total_calories: i64,
    pub total_distance_km: f64,
    pub days_recorded: usize,
    pub steps_goal_days: usize,
    pub calories_goal_days: usize,
}


impl WeeklySummary {
    pub fn average_steps(&self) -> f64 {
        self.total_steps as f64 / TRAILING_WEEK_DAYS as f64
    }
}


/// Summarize the trailing week ending at `reference_day`.
///
/// Days with nothing stored count as zeros and are not counted as recorded.
/// Step and calorie totals saturate at `i64::MAX`/`i64::MIN`.
pub fn summarize_week(store: &DailyMetricsStore, reference_day: NaiveDate) -> WeeklySummary {
    let days = store.get_trailing_week(reference_day);

    let mut total_steps = 0i64;
    let mut total_calories = 0i64;
    let mut total_distance_km = 0.0f64;
    let mut days_recorded = 0usize;
    let mut steps_goal_days = 0usize;
    let mut calories_goal_days = 0usize;

    for day in &days {
        total_steps = total_steps.saturating_add(day.steps);
        total_calories = total_calories.saturating_add(day.calories);
        total_distance_km += day.distance_km;

        if !store.contains_day(&day.day) {
            continue;
        }
        days_recorded += 1;

        if day.steps_goal_met() {
            steps_goal_days += 1;
        }
        if day.calories_goal_met() {
            calories_goal_days += 1;
        }
    }

    let end_day = days.first().map(|d| d.day.clone()).unwrap_or_default();
    let start_day = days.last().map(|d| d.day.clone()).unwrap_or_default();

    WeeklySummary {
        start_day,
        end_day,
        days,
        total_steps,
        total_calories,
        total_distance_km,
        days_recorded,
        steps_goal_days,
        calories_goal_days,
    }
}
