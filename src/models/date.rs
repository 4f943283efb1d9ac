//! Strict `YYYY-MM-DD` dates
//!
//! chrono accepts some looser forms (single-digit months, signed years), so
//! the shape is checked before the calendar parse.

use chrono::NaiveDate;
use std::fmt;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a date that must look exactly like `2024-01-31`
pub fn parse_date(s: &str) -> Result<NaiveDate, DateParseError> {
    let invalid = || DateParseError::InvalidFormat(s.to_string());
    let bytes = s.as_bytes();

    let shape_ok = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !shape_ok {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| invalid())
}

/// Format a date as `YYYY-MM-DD`
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Error type for date parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateParseError {
    InvalidFormat(String),
}

impl fmt::Display for DateParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat(s) => write!(f, "'{}' is not a valid YYYY-MM-DD date", s),
        }
    }
}

impl std::error::Error for DateParseError {}

/// Serde adapter for `#[serde(with = "iso_date")]`
pub mod iso_date {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_date(*date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_date(&raw).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let date = parse_date("2024-02-29").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert_eq!(format_date(date), "2024-02-29");
    }

    #[test]
    fn test_parse_rejects_bad_shapes() {
        for input in [
            "2024-1-05",
            "2024/01/05",
            "24-01-05",
            "2024-01-05 ",
            "+2024-01-5",
            "yesterday",
            "",
        ] {
            assert!(parse_date(input).is_err(), "accepted {:?}", input);
        }
    }

    #[test]
    fn test_parse_rejects_impossible_dates() {
        assert!(parse_date("2023-02-29").is_err());
        assert!(parse_date("2024-13-01").is_err());
        assert!(parse_date("2024-04-31").is_err());
    }
}
