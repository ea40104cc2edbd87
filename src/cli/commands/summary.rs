use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::summary::SummaryLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::colors::colorize_timebank;
use crate::utils::date::resolve_month;
use crate::utils::formatting::mins2readable;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { month } = cmd {
        let (year, m) = resolve_month(month.as_deref())?;
        let pool = DbPool::new(&cfg.database)?;
        let summary = SummaryLogic::month(&pool, year, m)?;

        let worked: i64 = summary.days.iter().map(|d| d.worked_minutes).sum();
        let expected: i64 = summary
            .days
            .iter()
            .filter(|d| d.is_complete())
            .map(|d| d.expected_minutes)
            .sum();

        header(format!("Timebank summary {}", summary.label()));
        println!("Recorded days : {}", summary.days.len());
        println!("Complete days : {}", summary.complete_days());
        println!("Worked        : {}", mins2readable(worked, false));
        println!("Expected      : {}", mins2readable(expected, false));
        println!(
            "Timebank      : {}",
            colorize_timebank(&summary.total)
        );
    }

    Ok(())
}
