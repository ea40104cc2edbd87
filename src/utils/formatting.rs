//! Formatting utilities used for CLI and export outputs.

use crate::models::TimeOfDay;

/// `HH:MM` or the `--:--` placeholder.
pub fn opt_time(t: Option<TimeOfDay>) -> String {
    t.map(|t| t.to_string()).unwrap_or_else(|| "--:--".to_string())
}

pub fn mins2readable(mins: i64, want_sign: bool) -> String {
    let abs_m = mins.abs();
    let hours = abs_m / 60;
    let minutes = abs_m % 60;

    let sign = if mins > 0 && want_sign {
        "+"
    } else if mins < 0 {
        "-"
    } else {
        ""
    };

    // e.g. +02h 25m or -01h 10m
    format!("{}{:02}h {:02}m", sign, hours, minutes)
}
