use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::summary::SummaryLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::colors::{colorize_optional, colorize_timebank};
use crate::utils::date::{resolve_month, weekday_short};
use crate::utils::formatting::{mins2readable, opt_time};
use crate::utils::table::{Column, Table};
use chrono::Datelike;

/// List the recorded days of a month with their timebank.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { month } = cmd {
        let (year, m) = resolve_month(month.as_deref())?;
        let pool = DbPool::new(&cfg.database)?;
        let summary = SummaryLogic::month(&pool, year, m)?;

        header(format!("Time entries {}", summary.label()));

        if summary.days.is_empty() {
            info(format!("No time entries recorded for {}", summary.label()));
            return Ok(());
        }

        let date_width = if cfg.show_weekday { 14 } else { 10 };
        let mut table = Table::new(vec![
            Column::new("Date", date_width),
            Column::new("In", 5),
            Column::new("Lunch", 11),
            Column::new("Out", 5),
            Column::new("Worked", 7),
            Column::new("Expected", 8),
            Column::new("Timebank", 8),
        ]);

        for d in &summary.days {
            let e = &d.entry;
            let date = if cfg.show_weekday {
                format!("{} {}", e.date_str(), weekday_short(e.date.weekday()))
            } else {
                e.date_str()
            };
            let lunch = if e.has_lunch() {
                format!("{}-{}", opt_time(e.lunch_start), opt_time(e.lunch_end))
            } else {
                "-".to_string()
            };
            let worked = if d.is_complete() {
                mins2readable(d.worked_minutes, false)
            } else {
                "-".to_string()
            };

            table.add_row(vec![
                date,
                colorize_optional(&opt_time(e.entry_time)),
                lunch,
                colorize_optional(&opt_time(e.exit_time)),
                worked,
                mins2readable(d.expected_minutes, false),
                colorize_timebank(&d.timebank),
            ]);
        }

        print!("{}", table.render(&cfg.separator_char));
        println!();
        println!(
            "Monthly timebank: {}",
            colorize_timebank(&summary.total)
        );
    }

    Ok(())
}
