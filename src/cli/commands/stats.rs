use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::core::report::print_statistics;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::MonthlyStatistics;
use crate::utils::date::YearMonth;
use serde::Serialize;

#[derive(Serialize)]
struct StatsReport<'a> {
    user: &'a str,
    month: String,
    #[serde(flatten)]
    stats: &'a MonthlyStatistics,
}

pub(crate) fn resolve_month(month: &Option<String>) -> AppResult<YearMonth> {
    match month {
        Some(m) => YearMonth::parse(m).ok_or_else(|| AppError::InvalidMonth(m.to_string())),
        None => Ok(YearMonth::current()),
    }
}

pub fn handle(cmd: &Commands, cfg: &Config, user: &str) -> AppResult<()> {
    if let Commands::Stats { month, json } = cmd {
        let month = resolve_month(month)?;

        let pool = DbPool::new(&cfg.database)?;
        let stats = Core::monthly_statistics(&pool.entries(), user, month)?;

        if *json {
            let report = StatsReport {
                user,
                month: month.to_string(),
                stats: &stats,
            };
            let out = serde_json::to_string_pretty(&report)
                .map_err(|e| AppError::Other(format!("JSON serialization error: {e}")))?;
            println!("{}", out);
        } else {
            print_statistics(user, month, &stats);
        }
    }

    Ok(())
}
