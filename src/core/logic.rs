use crate::core::calculator::{
    calculate_daily_timebank, calculate_monthly_timebank, expected_minutes, worked_minutes,
};
use crate::models::{DaySummary, MonthSummary, TimeEntry, WorkSchedule};

pub struct Core;

impl Core {
    pub fn build_daily_summary(schedule: &WorkSchedule, entry: &TimeEntry) -> DaySummary {
        let worked = if entry.is_complete() {
            worked_minutes(entry)
        } else {
            0
        };

        DaySummary {
            entry: entry.clone(),
            worked_minutes: worked,
            expected_minutes: expected_minutes(schedule),
            timebank: calculate_daily_timebank(schedule, entry),
        }
    }

    /// Per-day rows plus the aggregated total for one month.
    pub fn build_month_summary(
        year: i32,
        month: u32,
        schedule: &WorkSchedule,
        entries: &[TimeEntry],
    ) -> MonthSummary {
        let days = entries
            .iter()
            .map(|e| Self::build_daily_summary(schedule, e))
            .collect();

        MonthSummary {
            year,
            month,
            days,
            total: calculate_monthly_timebank(Some(entries), schedule),
        }
    }
}
