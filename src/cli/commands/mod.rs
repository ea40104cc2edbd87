pub mod add;
pub mod calendar;
pub mod config;
pub mod db;
pub mod del;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod schedule;
pub mod summary;
