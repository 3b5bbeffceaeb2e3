use crate::db::repository::EntryRepository;
use crate::errors::{AppError, AppResult};
use crate::utils::date::format_date;
use chrono::NaiveDate;

pub struct DeleteLogic;

impl DeleteLogic {
    pub fn apply<R: EntryRepository>(repo: &mut R, user: &str, date: NaiveDate) -> AppResult<()> {
        if !repo.delete(user, date)? {
            return Err(AppError::NoEntryForDate {
                user: user.to_string(),
                date: format_date(&date),
            });
        }
        Ok(())
    }
}
