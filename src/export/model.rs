// src/export/model.rs

use crate::models::{DaySummary, TimeOfDay};
use serde::Serialize;

/// Flat per-day row for CSV / JSON export.
#[derive(Serialize, Clone, Debug)]
pub struct DayExport {
    pub date: String,
    pub entry_time: Option<String>,
    pub lunch_start: Option<String>,
    pub lunch_end: Option<String>,
    pub exit_time: Option<String>,
    pub complete: bool,
    pub worked_minutes: i64,
    pub expected_minutes: i64,
    pub timebank_minutes: i64,
    pub timebank: String,
}

fn hhmm(t: Option<TimeOfDay>) -> Option<String> {
    t.map(|t| t.to_string())
}

impl From<&DaySummary> for DayExport {
    fn from(s: &DaySummary) -> Self {
        let e = &s.entry;
        Self {
            date: e.date_str(),
            entry_time: hhmm(e.entry_time),
            lunch_start: hhmm(e.lunch_start),
            lunch_end: hhmm(e.lunch_end),
            exit_time: hhmm(e.exit_time),
            complete: e.is_complete(),
            worked_minutes: s.worked_minutes,
            expected_minutes: s.expected_minutes,
            timebank_minutes: s.timebank.minutes,
            timebank: s.timebank.formatted.clone(),
        }
    }
}
