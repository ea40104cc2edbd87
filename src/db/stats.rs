use crate::db::migrate::applied_versions;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

#[derive(Debug, Default)]
pub struct DbStats {
    pub total_entries: i64,
    pub complete_entries: i64,
    pub first_date: Option<String>,
    pub last_date: Option<String>,
    pub migrations: Vec<String>,
}

pub fn collect(pool: &DbPool) -> AppResult<DbStats> {
    let total_entries: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM time_entries", [], |row| row.get(0))?;

    let complete_entries: i64 = pool.conn.query_row(
        "SELECT COUNT(*) FROM time_entries
         WHERE entry_time IS NOT NULL AND exit_time IS NOT NULL",
        [],
        |row| row.get(0),
    )?;

    let first_date: Option<String> = pool
        .conn
        .query_row(
            "SELECT date FROM time_entries ORDER BY date ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last_date: Option<String> = pool
        .conn
        .query_row(
            "SELECT date FROM time_entries ORDER BY date DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let migrations = applied_versions(&pool.conn)?;

    Ok(DbStats {
        total_entries,
        complete_entries,
        first_date,
        last_date,
        migrations,
    })
}

pub fn print_db_info(pool: &DbPool, db_path: &str) -> AppResult<()> {
    println!();

    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    let stats = collect(pool)?;

    println!(
        "{}• Recorded days:{} {}{}{} ({} complete)",
        CYAN, RESET, GREEN, stats.total_entries, RESET, stats.complete_entries
    );

    let fmt_first = stats
        .first_date
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = stats
        .last_date
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    println!("{}• Migrations applied:{} {}", CYAN, RESET, stats.migrations.len());
    for v in &stats.migrations {
        println!("    {}", v);
    }

    println!();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::queries::upsert_entry;
    use crate::models::{TimeEntry, TimeOfDay};
    use chrono::NaiveDate;

    #[test]
    fn counts_complete_days_and_range() {
        let pool = DbPool::in_memory().unwrap();
        let t = |s| Some(TimeOfDay::parse(s).unwrap());
        let d = |n| NaiveDate::from_ymd_opt(2025, 7, n).unwrap();

        upsert_entry(&pool.conn, &TimeEntry::with_times(d(1), t("09:00"), None, None, t("17:00"))).unwrap();
        upsert_entry(&pool.conn, &TimeEntry::with_times(d(9), t("09:00"), None, None, None)).unwrap();

        let stats = collect(&pool).unwrap();
        assert_eq!(stats.total_entries, 2);
        assert_eq!(stats.complete_entries, 1);
        assert_eq!(stats.first_date.as_deref(), Some("2025-07-01"));
        assert_eq!(stats.last_date.as_deref(), Some("2025-07-09"));
        assert_eq!(
            stats.migrations,
            vec![
                "20250301_0001_create_work_schedule".to_string(),
                "20250301_0002_create_time_entries".to_string(),
            ]
        );
    }
}
