// src/export/range.rs

use crate::errors::{AppError, AppResult};
use crate::utils::date::{first_day_of_month, last_day_of_month, parse_month};
use chrono::NaiveDate;

fn parse_bound(s: &str, is_start: bool) -> AppResult<NaiveDate> {
    match s.len() {
        // YYYY
        4 => {
            let y: i32 = s.parse().map_err(|_| AppError::InvalidDate(s.to_string()))?;
            let (m, d) = if is_start { (1, 1) } else { (12, 31) };
            NaiveDate::from_ymd_opt(y, m, d).ok_or_else(|| AppError::InvalidDate(s.to_string()))
        }
        // YYYY-MM
        7 => {
            let (y, m) = parse_month(s)?;
            if is_start {
                first_day_of_month(y, m)
            } else {
                last_day_of_month(y, m)
            }
        }
        // YYYY-MM-DD
        10 => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|_| AppError::InvalidDate(s.to_string())),
        _ => Err(AppError::InvalidDate(format!("unsupported range format: {s}"))),
    }
}

/// Parse --range (year / month / day / interval).
///
/// Supports `YYYY`, `YYYY-MM`, `YYYY-MM-DD` and `start:end` pairs of the
/// same shape. Returns inclusive bounds.
pub(crate) fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let (start, end) = match r.split_once(':') {
        Some((a, b)) => (a.trim(), b.trim()),
        None => (r.trim(), r.trim()),
    };

    if start.len() != end.len() {
        return Err(AppError::InvalidDate(format!(
            "start and end must have same format: {r}"
        )));
    }

    let d1 = parse_bound(start, true)?;
    let d2 = parse_bound(end, false)?;

    if d1 > d2 {
        return Err(AppError::InvalidDate(format!("range start after end: {r}")));
    }

    Ok((d1, d2))
}
