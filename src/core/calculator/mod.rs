pub mod duration;
pub mod timebank;

pub use duration::{expected_minutes, work_duration, worked_minutes};
pub use timebank::{calculate_daily_timebank, calculate_monthly_timebank};
