//! Storage seam for day entries.
//!
//! Commands and tests talk to this trait only, so the calculator and the
//! statistics never depend on how entries are kept.

use crate::errors::AppResult;
use crate::models::DayEntry;
use crate::utils::date::YearMonth;
use chrono::NaiveDate;
use std::collections::BTreeMap;

pub type EntriesByDate = BTreeMap<NaiveDate, DayEntry>;

pub trait EntryRepository {
    fn get(&self, user: &str, date: NaiveDate) -> AppResult<Option<DayEntry>>;

    /// Insert or overwrite the entry for (user, date).
    fn set(&mut self, user: &str, date: NaiveDate, entry: &DayEntry) -> AppResult<()>;

    /// Returns whether an entry was removed.
    fn delete(&mut self, user: &str, date: NaiveDate) -> AppResult<bool>;

    /// Entries between two dates (inclusive), or every entry of the user
    /// when `bounds` is `None`.
    fn list_range(
        &self,
        user: &str,
        bounds: Option<(NaiveDate, NaiveDate)>,
    ) -> AppResult<EntriesByDate>;

    /// Remove every user's entries dated strictly before `cutoff`.
    fn delete_older_than(&mut self, cutoff: NaiveDate) -> AppResult<usize>;

    fn list_by_month(&self, user: &str, month: YearMonth) -> AppResult<EntriesByDate> {
        self.list_range(user, Some((month.first_day(), month.last_day())))
    }
}
