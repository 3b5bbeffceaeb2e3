use crate::db::repository::EntryRepository;
use crate::errors::{AppError, AppResult};
use crate::models::{DayEntry, DayInput, WorkType};
use chrono::NaiveDate;

pub const OUTSIDE_TIME_STEP: u32 = 30;
pub const MAX_HOURLY_LEAVE: f64 = 4.0;
pub const MIN_ANNUAL_LEAVE_HOURS: f64 = 4.0;
pub const MAX_ANNUAL_LEAVE_HOURS: f64 = 8.0;

/// Outcome of a save: the stored entry and whether it replaced another.
#[derive(Debug, Clone)]
pub struct SaveOutcome {
    pub entry: DayEntry,
    pub replaced: bool,
}

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Input restrictions enforced at the command line. The calculator
    /// accepts a wider domain; these mirror what the entry form offers.
    pub fn validate_input(input: &DayInput) -> AppResult<()> {
        if input.outside_time % OUTSIDE_TIME_STEP != 0 {
            return Err(AppError::InvalidInput(format!(
                "outside time must be a multiple of {} minutes (got {})",
                OUTSIDE_TIME_STEP, input.outside_time
            )));
        }

        match input.work_type {
            WorkType::AnnualLeave => {
                if let Some(h) = input.annual_leave_hours
                    && !(MIN_ANNUAL_LEAVE_HOURS..=MAX_ANNUAL_LEAVE_HOURS).contains(&h)
                {
                    return Err(AppError::InvalidInput(format!(
                        "annual leave must be between {} and {} hours (got {})",
                        MIN_ANNUAL_LEAVE_HOURS, MAX_ANNUAL_LEAVE_HOURS, h
                    )));
                }
            }
            WorkType::Office | WorkType::Remote => {
                if let Some(h) = input.hourly_leave
                    && !(0.0..=MAX_HOURLY_LEAVE).contains(&h)
                {
                    return Err(AppError::InvalidInput(format!(
                        "hourly leave must be between 0 and {} hours (got {})",
                        MAX_HOURLY_LEAVE, h
                    )));
                }
            }
        }

        Ok(())
    }

    /// Validate, compute and store the entry for (user, date), replacing
    /// whatever was there.
    pub fn apply<R: EntryRepository>(
        repo: &mut R,
        user: &str,
        date: NaiveDate,
        input: DayInput,
    ) -> AppResult<SaveOutcome> {
        Self::validate_input(&input)?;

        let replaced = repo.get(user, date)?.is_some();
        let entry = DayEntry::new(input);

        repo.set(user, date, &entry)?;

        Ok(SaveOutcome { entry, replaced })
    }
}
