use super::time_of_day::TimeOfDay;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Expected daily timing for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkSchedule {
    pub entry_time: TimeOfDay,
    #[serde(default)]
    pub lunch_start: Option<TimeOfDay>,
    #[serde(default)]
    pub lunch_end: Option<TimeOfDay>,
    pub exit_time: TimeOfDay,
}

impl Default for WorkSchedule {
    /// 09:00 / 12:00 / 13:00 / 18:00
    fn default() -> Self {
        Self {
            entry_time: hm(9, 0),
            lunch_start: Some(hm(12, 0)),
            lunch_end: Some(hm(13, 0)),
            exit_time: hm(18, 0),
        }
    }
}

// Only used with literal, in-range values.
fn hm(hour: u32, minute: u32) -> TimeOfDay {
    TimeOfDay::new(hour, minute).unwrap_or_else(|_| unreachable!("{hour}:{minute} is in range"))
}

impl WorkSchedule {
    pub fn new(
        entry_time: TimeOfDay,
        lunch_start: Option<TimeOfDay>,
        lunch_end: Option<TimeOfDay>,
        exit_time: TimeOfDay,
    ) -> Self {
        Self {
            entry_time,
            lunch_start,
            lunch_end,
            exit_time,
        }
    }

    /// True when both lunch bounds are set.
    pub fn has_lunch(&self) -> bool {
        self.lunch_start.is_some() && self.lunch_end.is_some()
    }

    /// Check the ordering rules applied when a schedule is saved.
    ///
    /// With a full lunch break: entry < lunch start < lunch end < exit.
    /// Otherwise: entry < exit.
    pub fn validate(&self) -> AppResult<()> {
        if let (Some(ls), Some(le)) = (self.lunch_start, self.lunch_end) {
            let times = [
                ("Entry time", self.entry_time),
                ("Lunch start", ls),
                ("Lunch end", le),
                ("Exit time", self.exit_time),
            ];

            for w in times.windows(2) {
                let (a_name, a) = w[0];
                let (b_name, b) = w[1];
                if a >= b {
                    return Err(AppError::InvalidSchedule(format!(
                        "{a_name} must be before {b_name}"
                    )));
                }
            }

            return Ok(());
        }

        if self.entry_time >= self.exit_time {
            return Err(AppError::InvalidSchedule(
                "Entry time must be before exit time".to_string(),
            ));
        }

        Ok(())
    }
}
