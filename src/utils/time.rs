//! Time utilities: parsing HH:MM, minute conversions, signed delta formatting.

use crate::errors::AppResult;
use crate::models::TimeOfDay;

/// Minutes since midnight for an optional `HH:MM` string.
///
/// Absent or empty input counts as `0`. Malformed or out-of-range values
/// (`"25:70"`, `"9:5"`) are rejected with `AppError::InvalidTime`.
pub fn time_to_minutes(time: Option<&str>) -> AppResult<i64> {
    match time.map(str::trim) {
        None | Some("") => Ok(0),
        Some(s) => Ok(TimeOfDay::parse(s)?.minutes()),
    }
}

/// Format a signed minute delta as `+HH:MM` / `-HH:MM`.
///
/// The hour field is not wrapped: 1500 minutes is `+25:00`.
pub fn minutes_to_time(minutes: i64) -> String {
    let sign = if minutes >= 0 { '+' } else { '-' };
    let abs_m = minutes.unsigned_abs();
    format!("{}{:02}:{:02}", sign, abs_m / 60, abs_m % 60)
}

/// Parse an optional CLI argument. Empty strings are treated as absent.
pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<TimeOfDay>> {
    match input.map(|s| s.trim()) {
        None | Some("") => Ok(None),
        Some(s) => Ok(Some(TimeOfDay::parse(s)?)),
    }
}

/// Parse a field of an entry update.
///
/// - absent argument → `None` (keep the stored value)
/// - empty string → `Some(None)` (clear the stored value)
/// - `HH:MM` → `Some(Some(t))`
pub fn parse_time_update(input: Option<&String>) -> AppResult<Option<Option<TimeOfDay>>> {
    match input.map(|s| s.trim()) {
        None => Ok(None),
        Some("") => Ok(Some(None)),
        Some(s) => Ok(Some(Some(TimeOfDay::parse(s)?))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use proptest::prelude::*;

    #[test]
    fn time_to_minutes_handles_absent_and_empty() {
        assert_eq!(time_to_minutes(None).unwrap(), 0);
        assert_eq!(time_to_minutes(Some("")).unwrap(), 0);
        assert_eq!(time_to_minutes(Some("09:30")).unwrap(), 570);
        assert_eq!(time_to_minutes(Some("23:59")).unwrap(), 1439);
    }

    #[test]
    fn time_to_minutes_rejects_out_of_range() {
        assert!(matches!(
            time_to_minutes(Some("25:70")),
            Err(AppError::InvalidTime(_))
        ));
        assert!(time_to_minutes(Some("noon")).is_err());
    }

    #[test]
    fn minutes_to_time_signs_and_pads() {
        assert_eq!(minutes_to_time(0), "+00:00");
        assert_eq!(minutes_to_time(-45), "-00:45");
        assert_eq!(minutes_to_time(90), "+01:30");
        assert_eq!(minutes_to_time(-61), "-01:01");
    }

    #[test]
    fn minutes_to_time_handles_extremes() {
        assert_eq!(minutes_to_time(i64::MIN), "-153722867280912930:08");
        assert_eq!(minutes_to_time(i64::MAX), "+153722867280912930:07");
    }

    #[test]
    fn minutes_to_time_does_not_wrap_hours() {
        assert_eq!(minutes_to_time(1500), "+25:00");
        assert_eq!(minutes_to_time(-6000), "-100:00");
    }

    #[test]
    fn parse_optional_time_treats_blank_as_none() {
        assert_eq!(parse_optional_time(None).unwrap(), None);
        assert_eq!(parse_optional_time(Some(&"  ".to_string())).unwrap(), None);
        assert_eq!(
            parse_optional_time(Some(&"08:15".to_string())).unwrap(),
            Some(TimeOfDay::new(8, 15).unwrap())
        );
        assert!(parse_optional_time(Some(&"8.15".to_string())).is_err());
    }

    #[test]
    fn parse_time_update_distinguishes_absent_and_blank() {
        assert_eq!(parse_time_update(None).unwrap(), None);
        assert_eq!(parse_time_update(Some(&"".to_string())).unwrap(), Some(None));
        assert_eq!(
            parse_time_update(Some(&"17:45".to_string())).unwrap(),
            Some(Some(TimeOfDay::new(17, 45).unwrap()))
        );
        assert!(matches!(
            parse_time_update(Some(&"24:00".to_string())),
            Err(AppError::InvalidTime(_))
        ));
    }

    proptest! {
        #[test]
        fn prop_minutes_to_time_is_idempotent(m in any::<i64>()) {
            prop_assert_eq!(minutes_to_time(m), minutes_to_time(m));
        }

        #[test]
        fn prop_minutes_to_time_shape(m in prop_oneof![Just(i64::MIN), Just(i64::MAX), any::<i64>()]) {
            let s = minutes_to_time(m);
            let (sign, rest) = s.split_at(1);
            prop_assert_eq!(sign, if m >= 0 { "+" } else { "-" });

            let (h, mm) = rest.split_once(':').unwrap();
            prop_assert!(h.len() >= 2);
            prop_assert_eq!(mm.len(), 2);

            let abs = m.unsigned_abs();
            prop_assert_eq!(h.parse::<u64>().unwrap(), abs / 60);
            prop_assert_eq!(mm.parse::<u64>().unwrap(), abs % 60);
        }
    }
}
