use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::db::queries::delete_entry;
use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

pub struct DelLogic;

impl DelLogic {
    /// Remove the entry recorded for `date`.
    pub fn apply(pool: &mut DbPool, date: NaiveDate) -> AppResult<()> {
        let date_str = date.format("%Y-%m-%d").to_string();

        if !delete_entry(&pool.conn, &date)? {
            return Err(AppError::NoEntryForDate(date_str));
        }

        ttlog_soft(&pool.conn, "del", &date_str, "Deleted time entry");
        Ok(())
    }
}
