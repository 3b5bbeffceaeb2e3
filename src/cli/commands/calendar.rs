use crate::cli::commands::stats::resolve_month;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::print_calendar;
use crate::db::pool::DbPool;
use crate::db::repository::EntryRepository;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config, user: &str) -> AppResult<()> {
    if let Commands::Calendar { month } = cmd {
        let month = resolve_month(month)?;

        let pool = DbPool::new(&cfg.database)?;
        let entries = pool.entries().list_by_month(user, month)?;

        print_calendar(month, &entries);
    }

    Ok(())
}
