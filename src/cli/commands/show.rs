use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::core::report::print_breakdown;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config, user: &str) -> AppResult<()> {
    if let Commands::Show { date } = cmd {
        let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;

        let pool = DbPool::new(&cfg.database)?;
        let entry = Core::load_entry(&pool.entries(), user, d)?;

        print_breakdown(Some(d), entry.input(), entry.hours());
    }

    Ok(())
}
