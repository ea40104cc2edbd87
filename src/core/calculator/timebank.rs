//! Timebank engine: per-day and aggregated deltas between worked and
//! scheduled time. Pure functions, no I/O.

use super::duration::{expected_minutes, worked_minutes};
use crate::models::{TimeEntry, TimebankResult, WorkSchedule};

/// Delta for a single day.
///
/// An entry without entry or exit time is incomplete and contributes a
/// zero delta.
pub fn calculate_daily_timebank(schedule: &WorkSchedule, entry: &TimeEntry) -> TimebankResult {
    if !entry.is_complete() {
        return TimebankResult::zero();
    }

    let expected = expected_minutes(schedule);
    let actual = worked_minutes(entry);

    TimebankResult::from_minutes(actual - expected)
}

/// Sum of the daily deltas of `entries`, all measured against `schedule`.
///
/// `None` stands for missing upstream data and yields a zero result.
pub fn calculate_monthly_timebank(
    entries: Option<&[TimeEntry]>,
    schedule: &WorkSchedule,
) -> TimebankResult {
    let Some(entries) = entries else {
        return TimebankResult::zero();
    };

    let total = entries
        .iter()
        .map(|e| calculate_daily_timebank(schedule, e).minutes)
        .sum();

    TimebankResult::from_minutes(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimeOfDay;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn t(s: &str) -> Option<TimeOfDay> {
        Some(TimeOfDay::parse(s).unwrap())
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
    }

    fn entry(d: u32, a: &str, ls: &str, le: &str, b: &str) -> TimeEntry {
        let opt = |s: &str| if s.is_empty() { None } else { t(s) };
        TimeEntry::with_times(day(d), opt(a), opt(ls), opt(le), opt(b))
    }

    #[test]
    fn identical_entry_is_zero() {
        let r = calculate_daily_timebank(
            &WorkSchedule::default(),
            &entry(2, "09:00", "12:00", "13:00", "18:00"),
        );
        assert_eq!(r.minutes, 0);
        assert_eq!(r.formatted, "+00:00");
    }

    #[test]
    fn one_extra_hour_is_surplus() {
        let r = calculate_daily_timebank(
            &WorkSchedule::default(),
            &entry(2, "09:00", "12:00", "13:00", "19:00"),
        );
        assert_eq!(r.minutes, 60);
        assert_eq!(r.formatted, "+01:00");
    }

    #[test]
    fn leaving_early_is_deficit() {
        let r = calculate_daily_timebank(
            &WorkSchedule::default(),
            &entry(2, "09:00", "12:00", "13:00", "17:15"),
        );
        assert_eq!(r.minutes, -45);
        assert_eq!(r.formatted, "-00:45");
    }

    #[test]
    fn missing_exit_is_zero_regardless_of_other_fields() {
        let r = calculate_daily_timebank(
            &WorkSchedule::default(),
            &entry(2, "06:00", "12:00", "12:10", ""),
        );
        assert_eq!(r, TimebankResult::zero());

        let r = calculate_daily_timebank(&WorkSchedule::default(), &entry(2, "", "", "", "22:00"));
        assert_eq!(r, TimebankResult::zero());
    }

    #[test]
    fn entry_without_lunch_against_schedule_with_lunch() {
        // expected = 540 - 60 = 480, actual = 480 - 0 = 480
        let r = calculate_daily_timebank(&WorkSchedule::default(), &entry(2, "09:00", "", "", "17:00"));
        assert_eq!(r.minutes, 0);
        assert_eq!(r.formatted, "+00:00");
    }

    #[test]
    fn half_recorded_lunch_is_ignored() {
        let r = calculate_daily_timebank(
            &WorkSchedule::default(),
            &entry(2, "09:00", "12:00", "", "17:00"),
        );
        assert_eq!(r.minutes, 0);
    }

    #[test]
    fn schedule_without_lunch() {
        let schedule = WorkSchedule::new(t("08:00").unwrap(), None, None, t("16:00").unwrap());
        let r = calculate_daily_timebank(&schedule, &entry(2, "08:00", "12:00", "12:30", "16:00"));
        assert_eq!(r.minutes, -30);
        assert_eq!(r.formatted, "-00:30");
    }

    #[test]
    fn exit_before_entry_is_not_rejected() {
        let r = calculate_daily_timebank(&WorkSchedule::default(), &entry(2, "18:00", "", "", "09:00"));
        assert_eq!(r.minutes, -540 - 480);
    }

    #[test]
    fn monthly_sums_daily_deltas() {
        let schedule = WorkSchedule::default();
        let entries = vec![
            entry(2, "09:00", "12:00", "13:00", "19:00"),
            entry(3, "09:00", "12:00", "13:00", "17:30"),
            entry(4, "09:00", "", "", ""),
            entry(5, "08:00", "12:00", "12:30", "18:00"),
        ];

        let r = calculate_monthly_timebank(Some(entries.as_slice()), &schedule);
        assert_eq!(r.minutes, 60 - 30 + 0 + 90);
        assert_eq!(r.formatted, "+02:00");
    }

    #[test]
    fn monthly_of_nothing_is_zero() {
        let schedule = WorkSchedule::default();
        assert_eq!(calculate_monthly_timebank(Some(&[][..]), &schedule), TimebankResult::zero());
        assert_eq!(calculate_monthly_timebank(None, &schedule), TimebankResult::zero());
    }

    fn arb_time() -> impl Strategy<Value = Option<TimeOfDay>> {
        prop::option::of((0u32..24, 0u32..60).prop_map(|(h, m)| TimeOfDay::new(h, m).unwrap()))
    }

    fn arb_entry() -> impl Strategy<Value = TimeEntry> {
        (1u32..29, arb_time(), arb_time(), arb_time(), arb_time())
            .prop_map(|(d, a, ls, le, b)| TimeEntry::with_times(day(d), a, ls, le, b))
    }

    fn arb_schedule() -> impl Strategy<Value = WorkSchedule> {
        (arb_time(), arb_time(), arb_time(), arb_time()).prop_map(|(a, ls, le, b)| {
            WorkSchedule::new(
                a.unwrap_or_else(|| TimeOfDay::new(9, 0).unwrap()),
                ls,
                le,
                b.unwrap_or_else(|| TimeOfDay::new(18, 0).unwrap()),
            )
        })
    }

    proptest! {
        #[test]
        fn prop_daily_is_idempotent(schedule in arb_schedule(), e in arb_entry()) {
            let first = calculate_daily_timebank(&schedule, &e);
            let second = calculate_daily_timebank(&schedule, &e);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_monthly_is_idempotent(
            schedule in arb_schedule(),
            entries in prop::collection::vec(arb_entry(), 0..40),
        ) {
            let first = calculate_monthly_timebank(Some(entries.as_slice()), &schedule);
            let second = calculate_monthly_timebank(Some(entries.as_slice()), &schedule);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_monthly_equals_sum_of_daily(
            schedule in arb_schedule(),
            entries in prop::collection::vec(arb_entry(), 0..40),
        ) {
            let expected: i64 = entries
                .iter()
                .map(|e| calculate_daily_timebank(&schedule, e).minutes)
                .sum();

            let r = calculate_monthly_timebank(Some(entries.as_slice()), &schedule);
            prop_assert_eq!(r.minutes, expected);
            prop_assert_eq!(r.formatted, crate::utils::time::minutes_to_time(expected));
        }

        #[test]
        fn prop_monthly_ignores_order(
            schedule in arb_schedule(),
            entries in prop::collection::vec(arb_entry(), 0..40),
        ) {
            let mut reversed = entries.clone();
            reversed.reverse();
            prop_assert_eq!(
                calculate_monthly_timebank(Some(entries.as_slice()), &schedule),
                calculate_monthly_timebank(Some(reversed.as_slice()), &schedule)
            );
        }

        #[test]
        fn prop_incomplete_entries_contribute_nothing(
            schedule in arb_schedule(),
            e in arb_entry(),
        ) {
            let mut open = e.clone();
            open.exit_time = None;
            prop_assert_eq!(calculate_daily_timebank(&schedule, &open), TimebankResult::zero());
        }
    }
}
