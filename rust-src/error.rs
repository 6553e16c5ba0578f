//! Error types for fitpulse.

use chrono::NaiveDate;
use thiserror::Error;

use crate::config::DAY_KEY_FORMAT;
use crate::models::day_key;


#[derive(Error, Debug)]
pub enum FitnessError {
    #[error("Invalid date format: {0}. Expected YYYY-MM-DD")]
    InvalidDate(String),
}


/// Parse a `YYYY-MM-DD` day argument.
///
/// Only the canonical form is accepted: the input must match the day key of
/// the parsed date, which rules out signed or extended years and unpadded
/// fields.
pub fn parse_day(s: &str) -> Result<NaiveDate, FitnessError> {
    let trimmed = s.trim();
    NaiveDate::parse_from_str(trimmed, DAY_KEY_FORMAT)
        .ok()
        .filter(|date| day_key(*date) == trimmed)
        .ok_or_else(|| FitnessError::InvalidDate(s.to_string()))
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_day() {
        let day = parse_day("2024-01-15").unwrap();
        assert_eq!(day, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    }

    #[test]
    fn test_parse_day_rejects_garbage() {
        let err = parse_day("15/01/2024").unwrap_err();
        assert!(matches!(err, FitnessError::InvalidDate(_)));
        assert!(err.to_string().contains("Expected YYYY-MM-DD"));
    }

    #[test]
    fn test_parse_day_rejects_signed_and_extended_years() {
        assert!(parse_day("-262143-01-02").is_err());
        assert!(parse_day("+10000-01-01").is_err());
        assert!(parse_day("10000-01-01").is_err());
    }

    #[test]
    fn test_parse_day_rejects_unpadded_fields() {
        assert!(parse_day("2024-1-5").is_err());
        assert!(parse_day("24-01-05").is_err());
    }

    #[test]
    fn test_parse_day_trims_whitespace() {
        let day = parse_day(" 2024-01-15 ").unwrap();
        assert_eq!(day_key(day), "2024-01-15");
    }

    #[test]
    fn test_parse_day_rejects_impossible_date() {
        assert!(parse_day("2024-02-30").is_err());
    }
}
