pub mod day_summary;
pub mod time_entry;
pub mod time_of_day;
pub mod timebank;
pub mod work_schedule;

pub use day_summary::{DaySummary, MonthSummary};
pub use time_entry::TimeEntry;
pub use time_of_day::TimeOfDay;
pub use timebank::TimebankResult;
pub use work_schedule::WorkSchedule;
