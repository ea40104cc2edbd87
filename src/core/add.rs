use crate::core::logic::Core;
use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::db::queries::{load_entry_by_date, require_schedule, upsert_entry};
use crate::errors::{AppError, AppResult};
use crate::models::{DaySummary, TimeEntry, TimeOfDay};
use chrono::NaiveDate;

/// Field changes supplied on the command line.
///
/// `None` keeps the stored value, `Some(None)` clears it and
/// `Some(Some(t))` sets it.
#[derive(Debug, Default, Clone, Copy)]
pub struct EntryInput {
    pub entry_time: Option<Option<TimeOfDay>>,
    pub lunch_start: Option<Option<TimeOfDay>>,
    pub lunch_end: Option<Option<TimeOfDay>>,
    pub exit_time: Option<Option<TimeOfDay>>,
}

impl EntryInput {
    pub fn is_empty(&self) -> bool {
        self.entry_time.is_none()
            && self.lunch_start.is_none()
            && self.lunch_end.is_none()
            && self.exit_time.is_none()
    }

    /// Overlay the given fields on top of an existing entry for `date`.
    pub fn merge_into(&self, existing: Option<TimeEntry>, date: NaiveDate) -> TimeEntry {
        let base = existing.unwrap_or_else(|| TimeEntry::new(date));
        TimeEntry {
            date,
            entry_time: self.entry_time.unwrap_or(base.entry_time),
            lunch_start: self.lunch_start.unwrap_or(base.lunch_start),
            lunch_end: self.lunch_end.unwrap_or(base.lunch_end),
            exit_time: self.exit_time.unwrap_or(base.exit_time),
        }
    }
}

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Upsert the entry for `date` and return its immediate timebank.
    pub fn apply(pool: &mut DbPool, date: NaiveDate, input: EntryInput) -> AppResult<DaySummary> {
        if input.is_empty() {
            return Err(AppError::InvalidEntry(
                "at least one of --in, --lunch-start, --lunch-end, --out is required".into(),
            ));
        }

        let schedule = require_schedule(&pool.conn)?;
        let existing = load_entry_by_date(&pool.conn, &date)?;
        let is_update = existing.is_some();

        let entry = input.merge_into(existing, date);
        entry.validate_order()?;

        upsert_entry(&pool.conn, &entry)?;

        let summary = Core::build_daily_summary(&schedule, &entry);

        ttlog_soft(
            &pool.conn,
            if is_update { "edit" } else { "add" },
            &entry.date_str(),
            &format!("timebank {}", summary.timebank.formatted),
        );

        Ok(summary)
    }
}
