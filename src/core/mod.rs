pub mod add;
pub mod calculator;
pub mod config;
pub mod del;
pub mod log;
pub mod logic;
pub mod schedule;
pub mod summary;
