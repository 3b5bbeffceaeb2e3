use crate::core::calculator::calculate_monthly_statistics;
use crate::db::repository::EntryRepository;
use crate::errors::{AppError, AppResult};
use crate::models::{DayEntry, MonthlyStatistics};
use crate::utils::date::{YearMonth, format_date};
use chrono::NaiveDate;

pub struct Core;

impl Core {
    pub fn load_entry<R: EntryRepository>(
        repo: &R,
        user: &str,
        date: NaiveDate,
    ) -> AppResult<DayEntry> {
        repo.get(user, date)?
            .ok_or_else(|| AppError::NoEntryForDate {
                user: user.to_string(),
                date: format_date(&date),
            })
    }

    /// Statistics are rebuilt from storage on every call.
    pub fn monthly_statistics<R: EntryRepository>(
        repo: &R,
        user: &str,
        month: YearMonth,
    ) -> AppResult<MonthlyStatistics> {
        let entries = repo.list_by_month(user, month)?;
        Ok(calculate_monthly_statistics(month, &entries))
    }
}
