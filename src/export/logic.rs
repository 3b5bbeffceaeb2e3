// src/export/logic.rs

use crate::core::calculator::calculate_monthly_statistics;
use crate::db::repository::EntryRepository;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::EntryExport;
use crate::export::xlsx::export_xlsx;
use crate::ui::messages::warning;
use crate::utils::date::{YearMonth, parse_period};
use crate::utils::path::expand_tilde;
use chrono::NaiveDate;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export one user's entries.
    ///
    /// - `file`: absolute output path (`~` is expanded)
    /// - `range`: `None`, `"all"` or one of
    ///   - `YYYY`
    ///   - `YYYY-MM`
    ///   - `YYYY-MM-DD`
    ///   - `YYYY:YYYY`, `YYYY-MM:YYYY-MM`, `YYYY-MM-DD:YYYY-MM-DD`
    ///
    /// Returns the number of exported entries.
    pub fn export<R: EntryRepository>(
        repo: &R,
        user: &str,
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<usize> {
        let path = expand_tilde(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        let bounds: Option<(NaiveDate, NaiveDate)> = match range {
            None => None,
            Some(r) => parse_period(r).map_err(AppError::InvalidDate)?,
        };

        let entries = repo.list_range(user, bounds)?;

        if entries.is_empty() {
            warning("No entries found for selected range.");
            return Ok(0);
        }

        ensure_writable(&path, force)?;

        let rows: Vec<EntryExport> = entries
            .iter()
            .map(|(date, entry)| EntryExport::from_entry(*date, entry))
            .collect();

        match format {
            ExportFormat::Csv => export_csv(&rows, &path)?,
            ExportFormat::Json => export_json(&rows, &path)?,
            ExportFormat::Xlsx => {
                let summary = single_month(bounds).map(|m| (m, calculate_monthly_statistics(m, &entries)));
                export_xlsx(&rows, summary.as_ref().map(|(m, s)| (*m, s)), &path)?
            }
        }

        Ok(rows.len())
    }
}

/// The month covered by `bounds`, when they span exactly one calendar month.
fn single_month(bounds: Option<(NaiveDate, NaiveDate)>) -> Option<YearMonth> {
    let (start, end) = bounds?;
    let month = YearMonth::of(start);
    (start == month.first_day() && end == month.last_day()).then_some(month)
}
