use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DelLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { date } = cmd {
        let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;

        let mut pool = DbPool::new(&cfg.database)?;
        DelLogic::apply(&mut pool, d)?;

        success(format!("Deleted time entry for {}", d));
    }

    Ok(())
}
