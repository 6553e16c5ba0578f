//! Per-day health metrics record.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::config::{DAY_KEY_FORMAT, DEFAULT_CALORIES_GOAL, DEFAULT_STEPS_GOAL};


/// One calendar day of recorded metrics, keyed by `day` (`YYYY-MM-DD`).
///
/// Numeric fields are not validated; negative values are kept as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyMetrics {
    pub day: String,
    #[serde(default)]
    pub steps: i64,
    #[serde(default)]
    pub calories: i64,
    #[serde(default)]
    pub distance_km: f64,
    #[serde(default = "default_steps_goal")]
    pub steps_goal: i64,
    #[serde(default = "default_calories_goal")]
    pub calories_goal: i64,
    #[serde(default = "now_millis")]
    pub recorded_at_epoch_millis: i64,
}


fn default_steps_goal() -> i64 {
    DEFAULT_STEPS_GOAL
}

fn default_calories_goal() -> i64 {
    DEFAULT_CALORIES_GOAL
}

fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}


/// Format a date as a day key.
pub fn day_key(date: NaiveDate) -> String {
    date.format(DAY_KEY_FORMAT).to_string()
}


impl DailyMetrics {
    /// Create a record with default goals, stamped with the current time.
    pub fn new(day: impl Into<String>, steps: i64, calories: i64, distance_km: f64) -> Self {
        Self {
            day: day.into(),
            steps,
            calories,
            distance_km,
            steps_goal: DEFAULT_STEPS_GOAL,
            calories_goal: DEFAULT_CALORIES_GOAL,
            recorded_at_epoch_millis: now_millis(),
        }
    }

    /// The record that stands in for a day with nothing stored.
    pub fn default_for_day(day: impl Into<String>) -> Self {
        Self::new(day, 0, 0, 0.0)
    }

    /// True when every metric and goal matches `default_for_day`.
    ///
    /// The timestamp is not compared.
    pub fn has_default_values(&self) -> bool {
        self.steps == 0
            && self.calories == 0
            && self.distance_km == 0.0
            && self.steps_goal == DEFAULT_STEPS_GOAL
            && self.calories_goal == DEFAULT_CALORIES_GOAL
    }

    pub fn steps_goal_met(&self) -> bool {
        self.steps >= self.steps_goal
    }

    pub fn calories_goal_met(&self) -> bool {
        self.calories >= self.calories_goal
    }

    /// Fraction of the step goal reached (0.0 if the goal is not positive).
    pub fn steps_progress(&self) -> f64 {
        if self.steps_goal <= 0 {
            return 0.0;
        }
        self.steps as f64 / self.steps_goal as f64
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_for_day() {
        let record = DailyMetrics::default_for_day("2024-01-14");
        assert_eq!(record.day, "2024-01-14");
        assert_eq!(record.steps, 0);
        assert_eq!(record.calories, 0);
        assert_eq!(record.distance_km, 0.0);
        assert_eq!(record.steps_goal, 10000);
        assert_eq!(record.calories_goal, 600);
        assert!(record.has_default_values());
    }

    #[test]
    fn test_day_key_format() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(day_key(date), "2024-03-05");
    }

    #[test]
    fn test_goal_checks() {
        let record = DailyMetrics::new("2024-01-15", 12000, 450, 8.1);
        assert!(record.steps_goal_met());
        assert!(!record.calories_goal_met());
        assert!((record.steps_progress() - 1.2).abs() < 1e-9);
        assert!(!record.has_default_values());
    }

    #[test]
    fn test_steps_progress_without_goal() {
        let mut record = DailyMetrics::new("2024-01-15", 500, 0, 0.0);
        record.steps_goal = 0;
        assert_eq!(record.steps_progress(), 0.0);
    }

    #[test]
    fn test_deserialize_camel_case_with_defaults() {
        let json = r#"{"day":"2024-01-15","steps":5000,"calories":300,"distanceKm":3.2}"#;
        let record: DailyMetrics = serde_json::from_str(json).unwrap();
        assert_eq!(record.day, "2024-01-15");
        assert_eq!(record.steps, 5000);
        assert_eq!(record.distance_km, 3.2);
        assert_eq!(record.steps_goal, 10000);
        assert_eq!(record.calories_goal, 600);
        assert!(record.recorded_at_epoch_millis > 0);
    }

    #[test]
    fn test_deserialize_requires_day() {
        let json = r#"{"steps":5000}"#;
        assert!(serde_json::from_str::<DailyMetrics>(json).is_err());
    }

    #[test]
    fn test_serialize_field_names() {
        let record = DailyMetrics::new("2024-01-15", 1, 2, 3.0);
        let value = serde_json::to_value(&record).unwrap();
        assert!(value.get("distanceKm").is_some());
        assert!(value.get("stepsGoal").is_some());
        assert!(value.get("caloriesGoal").is_some());
        assert!(value.get("recordedAtEpochMillis").is_some());
    }
}
