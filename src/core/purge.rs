use crate::db::repository::EntryRepository;
use crate::errors::AppResult;
use crate::utils::date::YearMonth;
use chrono::NaiveDate;

/// Retention: entries older than the start of the previous month go.
pub struct PurgeLogic;

impl PurgeLogic {
    /// First day of the month before `today`'s month.
    pub fn default_cutoff(today: NaiveDate) -> NaiveDate {
        YearMonth::of(today).previous().first_day()
    }

    pub fn apply<R: EntryRepository>(repo: &mut R, cutoff: NaiveDate) -> AppResult<usize> {
        repo.delete_older_than(cutoff)
    }
}
