use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::summary::SummaryLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::colors::{GREY, RESET, YELLOW, color_for_timebank, colorize_timebank};
use crate::utils::date::{is_weekend, resolve_month};
use chrono::Datelike;

/// Print a Monday-first month grid.
///
/// Recorded days are colored by their timebank (green surplus, red deficit),
/// incomplete days are yellow, weekends without entries are grey.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calendar { month } = cmd {
        let (year, m) = resolve_month(month.as_deref())?;
        let pool = DbPool::new(&cfg.database)?;
        let summary = SummaryLogic::month(&pool, year, m)?;
        let cells = SummaryLogic::calendar(&summary)?;

        header(format!("Calendar {}", summary.label()));
        println!(" Mon Tue Wed Thu Fri Sat Sun");

        let offset = cells
            .first()
            .map(|(d, _)| d.weekday().num_days_from_monday())
            .unwrap_or(0);

        let mut line = "    ".repeat(offset as usize);
        for (date, day) in &cells {
            let label = format!("{:>4}", date.day());
            let cell = match day {
                Some(s) if s.is_complete() => {
                    format!("{}{}{}", color_for_timebank(&s.timebank), label, RESET)
                }
                Some(_) => format!("{}{}{}", YELLOW, label, RESET),
                None if is_weekend(date) => format!("{}{}{}", GREY, label, RESET),
                None => label,
            };
            line.push_str(&cell);

            if date.weekday().num_days_from_monday() == 6 {
                println!("{}", line);
                line.clear();
            }
        }
        if !line.is_empty() {
            println!("{}", line);
        }

        println!();
        println!(
            "Monthly timebank: {}",
            colorize_timebank(&summary.total)
        );
    }

    Ok(())
}
