use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::{AddLogic, EntryInput};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use crate::utils::colors::colorize_timebank;
use crate::utils::date;
use crate::utils::formatting::{mins2readable, opt_time};
use crate::utils::time::parse_time_update;

/// Add or update the entry of a day and print its timebank.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        entry,
        lunch_start,
        lunch_end,
        exit,
    } = cmd
    {
        let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;

        let input = EntryInput {
            entry_time: parse_time_update(entry.as_ref())?,
            lunch_start: parse_time_update(lunch_start.as_ref())?,
            lunch_end: parse_time_update(lunch_end.as_ref())?,
            exit_time: parse_time_update(exit.as_ref())?,
        };

        let mut pool = DbPool::new(&cfg.database)?;
        let summary = AddLogic::apply(&mut pool, d, input)?;
        let e = &summary.entry;

        success(format!(
            "{} saved: in {} | lunch {} - {} | out {}",
            e.date_str(),
            opt_time(e.entry_time),
            opt_time(e.lunch_start),
            opt_time(e.lunch_end),
            opt_time(e.exit_time)
        ));

        if !e.is_complete() {
            warning("Entry incomplete (in and out are both needed): no timebank yet.");
        } else {
            println!(
                "   Worked {} / expected {}",
                mins2readable(summary.worked_minutes, false),
                mins2readable(summary.expected_minutes, false)
            );
        }

        println!(
            "   Timebank: {}",
            colorize_timebank(&summary.timebank)
        );
    }

    Ok(())
}
