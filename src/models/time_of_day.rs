//! Validated time-of-day value (`HH:MM`, 24-hour clock).

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A wall-clock time with minute resolution.
///
/// Hours are always in `0..=23` and minutes in `0..=59`: the only way to
/// obtain a value is through [`TimeOfDay::new`] or [`TimeOfDay::parse`],
/// which reject anything outside that range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    pub fn new(hour: u32, minute: u32) -> AppResult<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0)
            .map(Self)
            .ok_or_else(|| AppError::InvalidTime(format!("{hour:02}:{minute:02}")))
    }

    /// Parse a strict `HH:MM` string.
    pub fn parse(s: &str) -> AppResult<Self> {
        let t = s.trim();

        // chrono accepts single-digit hours; the stored format does not.
        if t.len() != 5 || t.as_bytes()[2] != b':' {
            return Err(AppError::InvalidTime(s.to_string()));
        }

        NaiveTime::parse_from_str(t, "%H:%M")
            .map(Self)
            .map_err(|_| AppError::InvalidTime(s.to_string()))
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Minutes elapsed since midnight.
    pub fn minutes(&self) -> i64 {
        i64::from(self.hour()) * 60 + i64::from(self.minute())
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = AppError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<TimeOfDay> for String {
    fn from(t: TimeOfDay) -> Self {
        t.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_times() {
        let t = TimeOfDay::parse("09:30").unwrap();
        assert_eq!(t.hour(), 9);
        assert_eq!(t.minute(), 30);
        assert_eq!(t.minutes(), 570);
        assert_eq!(TimeOfDay::parse("00:00").unwrap().minutes(), 0);
        assert_eq!(TimeOfDay::parse("23:59").unwrap().minutes(), 1439);
    }

    #[test]
    fn rejects_out_of_range_and_malformed() {
        for bad in ["25:70", "24:00", "12:60", "9:30", "0930", "", "ab:cd", "12:3", "12:300"] {
            assert!(
                matches!(TimeOfDay::parse(bad), Err(AppError::InvalidTime(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn new_checks_range() {
        assert!(TimeOfDay::new(23, 59).is_ok());
        assert!(TimeOfDay::new(24, 0).is_err());
        assert!(TimeOfDay::new(10, 60).is_err());
    }

    #[test]
    fn display_is_zero_padded() {
        assert_eq!(TimeOfDay::new(7, 5).unwrap().to_string(), "07:05");
    }

    #[test]
    fn ordering_follows_clock() {
        let a = TimeOfDay::parse("08:59").unwrap();
        let b = TimeOfDay::parse("09:00").unwrap();
        assert!(a < b);
    }

    #[test]
    fn serde_uses_hhmm_string() {
        let t = TimeOfDay::parse("13:15").unwrap();
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, "\"13:15\"");

        let back: TimeOfDay = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);

        assert!(serde_json::from_str::<TimeOfDay>("\"26:00\"").is_err());
    }
}
