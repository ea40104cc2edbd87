use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::expected_minutes;
use crate::core::schedule::{ScheduleLogic, ScheduleUpdate};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::WorkSchedule;
use crate::ui::messages::success;
use crate::utils::formatting::{mins2readable, opt_time};
use crate::utils::time::parse_optional_time;

fn print_schedule(s: &WorkSchedule) {
    println!("🕘 Work schedule");
    println!("   In          : {}", s.entry_time);
    println!("   Lunch start : {}", opt_time(s.lunch_start));
    println!("   Lunch end   : {}", opt_time(s.lunch_end));
    println!("   Out         : {}", s.exit_time);
    println!(
        "   Expected    : {}",
        mins2readable(expected_minutes(s), false)
    );
}

/// Show the schedule, or update it when any option is given.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Schedule {
        entry,
        lunch_start,
        lunch_end,
        exit,
        no_lunch,
    } = cmd
    {
        let update = ScheduleUpdate {
            entry_time: parse_optional_time(entry.as_ref())?,
            lunch_start: parse_optional_time(lunch_start.as_ref())?,
            lunch_end: parse_optional_time(lunch_end.as_ref())?,
            exit_time: parse_optional_time(exit.as_ref())?,
            no_lunch: *no_lunch,
        };

        let mut pool = DbPool::new(&cfg.database)?;

        if update.is_empty() {
            print_schedule(&ScheduleLogic::show(&pool)?);
        } else {
            let s = ScheduleLogic::update(&mut pool, update)?;
            success("Work schedule updated.");
            print_schedule(&s);
        }
    }

    Ok(())
}
