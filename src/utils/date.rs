use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate, Weekday};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Parse `YYYY-MM` into `(year, month)`.
pub fn parse_month(s: &str) -> AppResult<(i32, u32)> {
    let d = NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d")
        .map_err(|_| AppError::InvalidMonth(s.to_string()))?;
    Ok((d.year(), d.month()))
}

/// `--month` argument or, when absent, the current month.
pub fn resolve_month(month: Option<&str>) -> AppResult<(i32, u32)> {
    match month {
        Some(m) => parse_month(m),
        None => {
            let t = today();
            Ok((t.year(), t.month()))
        }
    }
}

pub fn first_day_of_month(year: i32, month: u32) -> AppResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| AppError::InvalidMonth(format!("{year:04}-{month:02}")))
}

pub fn last_day_of_month(year: i32, month: u32) -> AppResult<NaiveDate> {
    let (ny, nm) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    first_day_of_month(ny, nm)?
        .pred_opt()
        .ok_or_else(|| AppError::InvalidMonth(format!("{year:04}-{month:02}")))
}

pub fn all_days_of_month(year: i32, month: u32) -> AppResult<Vec<NaiveDate>> {
    let first = first_day_of_month(year, month)?;
    let last = last_day_of_month(year, month)?;
    Ok(first.iter_days().take_while(|d| *d <= last).collect())
}

pub fn weekday_short(wd: Weekday) -> &'static str {
    match wd {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

pub fn is_weekend(d: &NaiveDate) -> bool {
    matches!(d.weekday(), Weekday::Sat | Weekday::Sun)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_month_accepts_year_month() {
        assert_eq!(parse_month("2025-02").unwrap(), (2025, 2));
        assert!(matches!(parse_month("2025-13"), Err(AppError::InvalidMonth(_))));
        assert!(parse_month("2025").is_err());
        assert!(parse_month("feb").is_err());
    }

    #[test]
    fn month_bounds_handle_leap_years_and_december() {
        assert_eq!(last_day_of_month(2024, 2).unwrap().day(), 29);
        assert_eq!(last_day_of_month(2025, 2).unwrap().day(), 28);
        assert_eq!(
            last_day_of_month(2025, 12).unwrap(),
            NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()
        );
        assert_eq!(all_days_of_month(2025, 4).unwrap().len(), 30);
    }

    #[test]
    fn weekend_detection() {
        assert!(is_weekend(&NaiveDate::from_ymd_opt(2025, 3, 8).unwrap()));
        assert!(!is_weekend(&NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()));
    }
}
