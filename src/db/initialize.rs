use crate::db::migrate::run_pending_migrations;
use crate::db::queries::ensure_schedule;
use crate::errors::AppResult;
use crate::models::WorkSchedule;
use rusqlite::Connection;

/// Initialize the database.
/// Delegates all schema creation / upgrades to the migration engine, then
/// stores `default_schedule` if no schedule has been saved yet.
pub fn init_db(conn: &Connection, default_schedule: &WorkSchedule) -> AppResult<WorkSchedule> {
    run_pending_migrations(conn)?;
    ensure_schedule(conn, default_schedule)
}
