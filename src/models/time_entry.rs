use super::time_of_day::TimeOfDay;
use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Actual recorded timing for one calendar day. Every time is optional:
/// a day may be saved while still in progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEntry {
    pub date: NaiveDate,
    pub entry_time: Option<TimeOfDay>,
    pub lunch_start: Option<TimeOfDay>,
    pub lunch_end: Option<TimeOfDay>,
    pub exit_time: Option<TimeOfDay>,
}

impl TimeEntry {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            entry_time: None,
            lunch_start: None,
            lunch_end: None,
            exit_time: None,
        }
    }

    pub fn with_times(
        date: NaiveDate,
        entry_time: Option<TimeOfDay>,
        lunch_start: Option<TimeOfDay>,
        lunch_end: Option<TimeOfDay>,
        exit_time: Option<TimeOfDay>,
    ) -> Self {
        Self {
            date,
            entry_time,
            lunch_start,
            lunch_end,
            exit_time,
        }
    }

    /// Entry and exit are both recorded.
    pub fn is_complete(&self) -> bool {
        self.entry_time.is_some() && self.exit_time.is_some()
    }

    pub fn has_lunch(&self) -> bool {
        self.lunch_start.is_some() && self.lunch_end.is_some()
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Reject entries whose recorded times are not strictly increasing
    /// (entry, lunch start, lunch end, exit). Missing fields are skipped.
    pub fn validate_order(&self) -> AppResult<()> {
        let present: Vec<(&str, TimeOfDay)> = [
            ("entry time", self.entry_time),
            ("lunch start", self.lunch_start),
            ("lunch end", self.lunch_end),
            ("exit time", self.exit_time),
        ]
        .into_iter()
        .filter_map(|(name, t)| t.map(|t| (name, t)))
        .collect();

        for w in present.windows(2) {
            let (a_name, a) = w[0];
            let (b_name, b) = w[1];
            if a >= b {
                return Err(AppError::InvalidEntry(format!(
                    "{} {a_name} ({a}) must be before {b_name} ({b})",
                    self.date_str()
                )));
            }
        }

        Ok(())
    }
}
