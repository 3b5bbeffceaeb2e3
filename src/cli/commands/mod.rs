pub mod add;
pub mod backup;
pub mod calc;
pub mod calendar;
pub mod config;
pub mod db;
pub mod del;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod purge;
pub mod show;
pub mod stats;
