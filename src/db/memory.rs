//! Map-backed repository with the same semantics as the SQLite one.

use crate::db::repository::{EntriesByDate, EntryRepository};
use crate::errors::AppResult;
use crate::models::DayEntry;
use chrono::NaiveDate;
use std::collections::HashMap;

#[derive(Debug, Default, Clone)]
pub struct MemoryRepository {
    users: HashMap<String, EntriesByDate>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.users.values().map(|e| e.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EntryRepository for MemoryRepository {
    fn get(&self, user: &str, date: NaiveDate) -> AppResult<Option<DayEntry>> {
        Ok(self.users.get(user).and_then(|e| e.get(&date)).cloned())
    }

    fn set(&mut self, user: &str, date: NaiveDate, entry: &DayEntry) -> AppResult<()> {
        self.users
            .entry(user.to_string())
            .or_default()
            .insert(date, entry.clone());
        Ok(())
    }

    fn delete(&mut self, user: &str, date: NaiveDate) -> AppResult<bool> {
        Ok(self
            .users
            .get_mut(user)
            .and_then(|e| e.remove(&date))
            .is_some())
    }

    fn list_range(
        &self,
        user: &str,
        bounds: Option<(NaiveDate, NaiveDate)>,
    ) -> AppResult<EntriesByDate> {
        let Some(entries) = self.users.get(user) else {
            return Ok(EntriesByDate::new());
        };

        let out = match bounds {
            None => entries.clone(),
            Some((start, end)) if start > end => EntriesByDate::new(),
            Some((start, end)) => entries
                .range(start..=end)
                .map(|(d, e)| (*d, e.clone()))
                .collect(),
        };

        Ok(out)
    }

    fn delete_older_than(&mut self, cutoff: NaiveDate) -> AppResult<usize> {
        let mut removed = 0;
        for entries in self.users.values_mut() {
            let kept = entries.split_off(&cutoff);
            removed += entries.len();
            *entries = kept;
        }
        Ok(removed)
    }
}
