//! Application settings and path constants.

use std::path::PathBuf;


/// Daily step target used when a record does not carry its own.
pub const DEFAULT_STEPS_GOAL: i64 = 10_000;

/// Daily calorie target used when a record does not carry its own.
pub const DEFAULT_CALORIES_GOAL: i64 = 600;

/// Length of the trailing window returned by weekly queries.
pub const TRAILING_WEEK_DAYS: usize = 7;

/// Canonical day key format.
pub const DAY_KEY_FORMAT: &str = "%Y-%m-%d";


/// Get the fitpulse data directory.
pub fn get_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".fitpulse")
}


/// Get the default daily metrics file path.
pub fn get_data_path() -> PathBuf {
    get_data_dir().join("daily_metrics.jsonl")
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(DEFAULT_STEPS_GOAL, 10000);
        assert_eq!(DEFAULT_CALORIES_GOAL, 600);
        assert_eq!(TRAILING_WEEK_DAYS, 7);
        assert_eq!(DAY_KEY_FORMAT, "%Y-%m-%d");
    }

    #[test]
    fn test_get_data_path() {
        let path = get_data_path();
        assert!(path.to_string_lossy().contains(".fitpulse"));
        assert!(path.to_string_lossy().ends_with("daily_metrics.jsonl"));
    }
}
