//! Net work duration of a day (schedule or actual entry).

use crate::models::{TimeEntry, TimeOfDay, WorkSchedule};

fn mins(t: Option<TimeOfDay>) -> i64 {
    t.map(|t| t.minutes()).unwrap_or(0)
}

/// `exit - entry`, minus the lunch span only when BOTH lunch bounds are set.
///
/// Absent entry/exit count as midnight. No ordering check is done: an exit
/// before the entry simply yields a negative duration.
pub fn work_duration(
    entry: Option<TimeOfDay>,
    lunch_start: Option<TimeOfDay>,
    lunch_end: Option<TimeOfDay>,
    exit: Option<TimeOfDay>,
) -> i64 {
    let mut minutes = mins(exit) - mins(entry);

    if let (Some(ls), Some(le)) = (lunch_start, lunch_end) {
        minutes -= le.minutes() - ls.minutes();
    }

    minutes
}

/// Expected net minutes of work per day.
pub fn expected_minutes(schedule: &WorkSchedule) -> i64 {
    work_duration(
        Some(schedule.entry_time),
        schedule.lunch_start,
        schedule.lunch_end,
        Some(schedule.exit_time),
    )
}

/// Actual net minutes recorded in an entry.
pub fn worked_minutes(entry: &TimeEntry) -> i64 {
    work_duration(
        entry.entry_time,
        entry.lunch_start,
        entry.lunch_end,
        entry.exit_time,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> Option<TimeOfDay> {
        Some(TimeOfDay::parse(s).unwrap())
    }

    #[test]
    fn default_schedule_expects_eight_hours() {
        assert_eq!(expected_minutes(&WorkSchedule::default()), 480);
    }

    #[test]
    fn lunch_is_all_or_nothing() {
        assert_eq!(work_duration(t("09:00"), t("12:00"), t("13:00"), t("18:00")), 480);
        assert_eq!(work_duration(t("09:00"), t("12:00"), None, t("18:00")), 540);
        assert_eq!(work_duration(t("09:00"), None, t("13:00"), t("18:00")), 540);
    }

    #[test]
    fn inverted_times_give_negative_duration() {
        assert_eq!(work_duration(t("18:00"), None, None, t("09:00")), -540);
    }
}
