use crate::errors::{AppError, AppResult};
use crate::models::{TimeEntry, TimeOfDay, WorkSchedule};
use chrono::{Local, NaiveDate};
use rusqlite::types::Type;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

fn conversion_error(idx: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(err))
}

fn get_time(row: &Row, col: &str) -> Result<Option<TimeOfDay>> {
    let raw: Option<String> = row.get(col)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => {
            let idx = row.as_ref().column_index(col)?;
            TimeOfDay::parse(s)
                .map(Some)
                .map_err(|e| conversion_error(idx, e))
        }
    }
}

fn get_required_time(row: &Row, col: &str) -> Result<TimeOfDay> {
    let idx = row.as_ref().column_index(col)?;
    get_time(row, col)?.ok_or_else(|| {
        conversion_error(idx, AppError::InvalidTime(format!("{col} is empty")))
    })
}

fn time_str(t: Option<TimeOfDay>) -> Option<String> {
    t.map(|t| t.to_string())
}

pub fn map_schedule_row(row: &Row) -> Result<WorkSchedule> {
    Ok(WorkSchedule {
        entry_time: get_required_time(row, "entry_time")?,
        lunch_start: get_time(row, "lunch_start")?,
        lunch_end: get_time(row, "lunch_end")?,
        exit_time: get_required_time(row, "exit_time")?,
    })
}

pub fn map_entry_row(row: &Row) -> Result<TimeEntry> {
    let date_str: String = row.get("date")?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        match row.as_ref().column_index("date") {
            Ok(idx) => conversion_error(idx, AppError::InvalidDate(date_str.clone())),
            Err(e) => e,
        }
    })?;

    Ok(TimeEntry {
        date,
        entry_time: get_time(row, "entry_time")?,
        lunch_start: get_time(row, "lunch_start")?,
        lunch_end: get_time(row, "lunch_end")?,
        exit_time: get_time(row, "exit_time")?,
    })
}

// ---------------------------
// Work schedule
// ---------------------------

pub fn load_schedule(conn: &Connection) -> AppResult<Option<WorkSchedule>> {
    let schedule = conn
        .query_row(
            "SELECT entry_time, lunch_start, lunch_end, exit_time
             FROM work_schedule WHERE id = 1",
            [],
            map_schedule_row,
        )
        .optional()?;
    Ok(schedule)
}

/// Load the schedule, failing if the database was never initialized.
pub fn require_schedule(conn: &Connection) -> AppResult<WorkSchedule> {
    load_schedule(conn)?.ok_or(AppError::ScheduleNotFound)
}

/// Insert or replace the single schedule row.
pub fn save_schedule(conn: &Connection, schedule: &WorkSchedule) -> AppResult<()> {
    conn.execute(
        "INSERT INTO work_schedule (id, entry_time, lunch_start, lunch_end, exit_time, updated_at)
         VALUES (1, ?1, ?2, ?3, ?4, ?5)
         ON CONFLICT(id) DO UPDATE
         SET entry_time = excluded.entry_time,
             lunch_start = excluded.lunch_start,
             lunch_end = excluded.lunch_end,
             exit_time = excluded.exit_time,
             updated_at = excluded.updated_at",
        params![
            schedule.entry_time.to_string(),
            time_str(schedule.lunch_start),
            time_str(schedule.lunch_end),
            schedule.exit_time.to_string(),
            Local::now().to_rfc3339(),
        ],
    )?;
    Ok(())
}

/// Return the stored schedule, storing `default` first if there is none.
pub fn ensure_schedule(conn: &Connection, default: &WorkSchedule) -> AppResult<WorkSchedule> {
    if let Some(s) = load_schedule(conn)? {
        return Ok(s);
    }
    save_schedule(conn, default)?;
    Ok(default.clone())
}

// ---------------------------
// Time entries
// ---------------------------

/// One entry per date: an existing row for the same date is overwritten.
pub fn upsert_entry(conn: &Connection, entry: &TimeEntry) -> AppResult<()> {
    let now = Local::now().to_rfc3339();

    conn.execute(
        "INSERT INTO time_entries
            (date, entry_time, lunch_start, lunch_end, exit_time, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?6)
         ON CONFLICT(date) DO UPDATE
         SET entry_time = excluded.entry_time,
             lunch_start = excluded.lunch_start,
             lunch_end = excluded.lunch_end,
             exit_time = excluded.exit_time,
             updated_at = excluded.updated_at",
        params![
            entry.date_str(),
            time_str(entry.entry_time),
            time_str(entry.lunch_start),
            time_str(entry.lunch_end),
            time_str(entry.exit_time),
            now,
        ],
    )?;
    Ok(())
}

pub fn load_entry_by_date(conn: &Connection, date: &NaiveDate) -> AppResult<Option<TimeEntry>> {
    let entry = conn
        .query_row(
            "SELECT * FROM time_entries WHERE date = ?1",
            [date.format("%Y-%m-%d").to_string()],
            map_entry_row,
        )
        .optional()?;
    Ok(entry)
}

/// Entries in `[from, to]`, ordered by date.
pub fn load_entries_in_range(
    conn: &Connection,
    from: &NaiveDate,
    to: &NaiveDate,
) -> AppResult<Vec<TimeEntry>> {
    let mut stmt = conn.prepare_cached(
        "SELECT * FROM time_entries
         WHERE date >= ?1 AND date <= ?2
         ORDER BY date ASC",
    )?;

    let rows = stmt.query_map(
        params![
            from.format("%Y-%m-%d").to_string(),
            to.format("%Y-%m-%d").to_string()
        ],
        map_entry_row,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_entries_by_month(conn: &Connection, year: i32, month: u32) -> AppResult<Vec<TimeEntry>> {
    let mut stmt = conn.prepare_cached(
        "SELECT * FROM time_entries
         WHERE strftime('%Y-%m', date) = ?1
         ORDER BY date ASC",
    )?;

    let rows = stmt.query_map([format!("{year:04}-{month:02}")], map_entry_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_all_entries(conn: &Connection) -> AppResult<Vec<TimeEntry>> {
    let mut stmt = conn.prepare_cached("SELECT * FROM time_entries ORDER BY date ASC")?;
    let rows = stmt.query_map([], map_entry_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Returns `true` if a row was removed.
pub fn delete_entry(conn: &Connection, date: &NaiveDate) -> AppResult<bool> {
    let n = conn.execute(
        "DELETE FROM time_entries WHERE date = ?1",
        [date.format("%Y-%m-%d").to_string()],
    )?;
    Ok(n > 0)
}
