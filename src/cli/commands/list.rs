use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::print_entries;
use crate::db::pool::DbPool;
use crate::db::repository::EntryRepository;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use crate::utils::date::{self, YearMonth};
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config, user: &str) -> AppResult<()> {
    if let Commands::List { period, now } = cmd {
        let bounds = if *now {
            let today = date::today();
            Some((today, today))
        } else {
            resolve_period(period)?
        };

        let pool = DbPool::new(&cfg.database)?;
        let entries = pool.entries().list_range(user, bounds)?;

        if entries.is_empty() {
            info(format!("No entries for {} in {}.", user, describe(bounds)));
            return Ok(());
        }

        println!("🗓️  Entries for {} ({})\n", user, describe(bounds));

        let separator = cfg.separator_char.chars().next().unwrap_or('-');
        print_entries(&entries, separator, cfg.show_weekday);
    }

    Ok(())
}

/// `None` period → current month.
fn resolve_period(period: &Option<String>) -> AppResult<Option<(NaiveDate, NaiveDate)>> {
    match period {
        Some(p) => date::parse_period(p).map_err(AppError::InvalidDate),
        None => {
            let month = YearMonth::current();
            Ok(Some((month.first_day(), month.last_day())))
        }
    }
}

fn describe(bounds: Option<(NaiveDate, NaiveDate)>) -> String {
    match bounds {
        None => "all dates".to_string(),
        Some((start, end)) if start == end => start.to_string(),
        Some((start, end)) => format!("{} → {}", start, end),
    }
}
