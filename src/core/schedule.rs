use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::db::queries::{require_schedule, save_schedule};
use crate::errors::AppResult;
use crate::models::{TimeOfDay, WorkSchedule};
use crate::utils::formatting::opt_time;

/// Requested changes to the stored schedule.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScheduleUpdate {
    pub entry_time: Option<TimeOfDay>,
    pub lunch_start: Option<TimeOfDay>,
    pub lunch_end: Option<TimeOfDay>,
    pub exit_time: Option<TimeOfDay>,
    /// Drop both lunch bounds.
    pub no_lunch: bool,
}

impl ScheduleUpdate {
    pub fn is_empty(&self) -> bool {
        self.entry_time.is_none()
            && self.lunch_start.is_none()
            && self.lunch_end.is_none()
            && self.exit_time.is_none()
            && !self.no_lunch
    }

    pub fn apply_to(&self, current: &WorkSchedule) -> WorkSchedule {
        let (lunch_start, lunch_end) = if self.no_lunch {
            (None, None)
        } else {
            (
                self.lunch_start.or(current.lunch_start),
                self.lunch_end.or(current.lunch_end),
            )
        };

        WorkSchedule {
            entry_time: self.entry_time.unwrap_or(current.entry_time),
            lunch_start,
            lunch_end,
            exit_time: self.exit_time.unwrap_or(current.exit_time),
        }
    }
}

pub struct ScheduleLogic;

impl ScheduleLogic {
    pub fn show(pool: &DbPool) -> AppResult<WorkSchedule> {
        require_schedule(&pool.conn)
    }

    /// Validate and store the updated schedule.
    pub fn update(pool: &mut DbPool, update: ScheduleUpdate) -> AppResult<WorkSchedule> {
        let current = require_schedule(&pool.conn)?;
        let next = update.apply_to(&current);
        next.validate()?;

        save_schedule(&pool.conn, &next)?;

        ttlog_soft(
            &pool.conn,
            "schedule",
            "work_schedule",
            &format!(
                "{} / {} / {} / {}",
                next.entry_time,
                opt_time(next.lunch_start),
                opt_time(next.lunch_end),
                next.exit_time
            ),
        );

        Ok(next)
    }
}
