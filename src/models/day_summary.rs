use super::time_entry::TimeEntry;
use super::timebank::TimebankResult;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct DaySummary {
    pub entry: TimeEntry,
    pub worked_minutes: i64,
    pub expected_minutes: i64,
    pub timebank: TimebankResult,
}

impl DaySummary {
    pub fn is_complete(&self) -> bool {
        self.entry.is_complete()
    }
}

/// Dashboard view of one month.
#[derive(Debug, Clone, Serialize)]
pub struct MonthSummary {
    pub year: i32,
    pub month: u32,
    pub days: Vec<DaySummary>,
    pub total: TimebankResult,
}

impl MonthSummary {
    pub fn complete_days(&self) -> usize {
        self.days.iter().filter(|d| d.is_complete()).count()
    }

    pub fn label(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }
}
