use crate::core::logic::Core;
use crate::db::pool::DbPool;
use crate::db::queries::{load_entries_by_month, require_schedule};
use crate::errors::AppResult;
use crate::models::{DaySummary, MonthSummary};
use crate::utils::date::all_days_of_month;
use chrono::NaiveDate;

pub struct SummaryLogic;

impl SummaryLogic {
    /// Load the month's entries and aggregate them against the stored schedule.
    pub fn month(pool: &DbPool, year: i32, month: u32) -> AppResult<MonthSummary> {
        let schedule = require_schedule(&pool.conn)?;
        let entries = load_entries_by_month(&pool.conn, year, month)?;
        Ok(Core::build_month_summary(year, month, &schedule, &entries))
    }

    /// One cell per calendar day, `None` where nothing was recorded.
    pub fn calendar(
        summary: &MonthSummary,
    ) -> AppResult<Vec<(NaiveDate, Option<&DaySummary>)>> {
        let days = all_days_of_month(summary.year, summary.month)?;
        Ok(days
            .into_iter()
            .map(|d| (d, summary.days.iter().find(|s| s.entry.date == d)))
            .collect())
    }
}
