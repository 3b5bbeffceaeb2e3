//! SQLite-backed entry repository.

use crate::db::repository::{EntriesByDate, EntryRepository};
use crate::errors::{AppError, AppResult};
use crate::models::{DayEntry, DayInput, WorkType};
use crate::utils::date::format_date;
use crate::utils::time::{hours_to_minutes, minutes_to_hours, parse_time};
use chrono::{Local, NaiveDate, NaiveTime};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const SELECT_COLUMNS: &str = "SELECT date, work_type, checkin_time, checkout_time,
            annual_leave_hours, hourly_leave, outside_time, dinner_meal
     FROM time_entries";

pub struct SqliteRepository<'a> {
    conn: &'a Connection,
}

impl<'a> SqliteRepository<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

fn conversion_error(err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(err))
}

fn map_time(raw: Option<String>) -> Result<Option<NaiveTime>> {
    match raw {
        None => Ok(None),
        Some(s) => parse_time(&s)
            .map(Some)
            .ok_or_else(|| conversion_error(AppError::InvalidTime(s))),
    }
}

/// Rebuild an entry from its stored inputs; the derived columns are not
/// read back, the breakdown is recomputed.
pub fn map_row(row: &Row) -> Result<(NaiveDate, DayEntry)> {
    let date_str: String = row.get("date")?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
        .map_err(|_| conversion_error(AppError::InvalidDate(date_str.clone())))?;

    let kind_str: String = row.get("work_type")?;
    let work_type = WorkType::from_db_str(&kind_str)
        .ok_or_else(|| conversion_error(AppError::InvalidWorkType(kind_str.clone())))?;

    let mut input = DayInput::new(work_type);
    input.checkin_time = map_time(row.get("checkin_time")?)?;
    input.checkout_time = map_time(row.get("checkout_time")?)?;
    input.annual_leave_hours = Some(minutes_to_hours(row.get("annual_leave_hours")?));
    input.hourly_leave = Some(minutes_to_hours(row.get("hourly_leave")?));
    input.outside_time = row.get("outside_time")?;
    input.dinner_meal = Some(row.get::<_, i32>("dinner_meal")? == 1);

    Ok((date, DayEntry::new(input)))
}

fn time_str(t: Option<NaiveTime>) -> Option<String> {
    t.map(|t| t.format("%H:%M").to_string())
}

impl EntryRepository for SqliteRepository<'_> {
    fn get(&self, user: &str, date: NaiveDate) -> AppResult<Option<DayEntry>> {
        let mut stmt = self.conn.prepare_cached(&format!(
            "{SELECT_COLUMNS} WHERE user_id = ?1 AND date = ?2"
        ))?;

        let found = stmt
            .query_row(params![user, format_date(&date)], map_row)
            .optional()?;

        Ok(found.map(|(_, entry)| entry))
    }

    fn set(&mut self, user: &str, date: NaiveDate, entry: &DayEntry) -> AppResult<()> {
        let input = entry.input();
        let hours = entry.hours();
        let now = Local::now().to_rfc3339();

        self.conn.execute(
            "INSERT INTO time_entries (
                user_id, date, work_type, checkin_time, checkout_time,
                annual_leave_hours, hourly_leave, outside_time, dinner_meal,
                total_hours, raw_hours, break_deduction, created_at, updated_at
             )
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?13)
             ON CONFLICT(user_id, date) DO UPDATE SET
                work_type          = excluded.work_type,
                checkin_time       = excluded.checkin_time,
                checkout_time      = excluded.checkout_time,
                annual_leave_hours = excluded.annual_leave_hours,
                hourly_leave       = excluded.hourly_leave,
                outside_time       = excluded.outside_time,
                dinner_meal        = excluded.dinner_meal,
                total_hours        = excluded.total_hours,
                raw_hours          = excluded.raw_hours,
                break_deduction    = excluded.break_deduction,
                updated_at         = excluded.updated_at",
            params![
                user,
                format_date(&date),
                input.work_type.to_db_str(),
                time_str(input.checkin_time),
                time_str(input.checkout_time),
                hours_to_minutes(input.annual_leave_hours.unwrap_or(0.0)),
                hours_to_minutes(input.hourly_leave.unwrap_or(0.0)),
                input.outside_time,
                if input.dinner_meal.unwrap_or(false) { 1 } else { 0 },
                hours_to_minutes(hours.total_hours),
                hours_to_minutes(hours.raw_hours),
                hours_to_minutes(hours.break_deduction),
                now,
            ],
        )?;

        Ok(())
    }

    fn delete(&mut self, user: &str, date: NaiveDate) -> AppResult<bool> {
        let n = self.conn.execute(
            "DELETE FROM time_entries WHERE user_id = ?1 AND date = ?2",
            params![user, format_date(&date)],
        )?;
        Ok(n > 0)
    }

    fn list_range(
        &self,
        user: &str,
        bounds: Option<(NaiveDate, NaiveDate)>,
    ) -> AppResult<EntriesByDate> {
        let mut out = EntriesByDate::new();

        match bounds {
            None => {
                let mut stmt = self.conn.prepare_cached(&format!(
                    "{SELECT_COLUMNS} WHERE user_id = ?1 ORDER BY date ASC"
                ))?;
                for r in stmt.query_map([user], map_row)? {
                    let (date, entry) = r?;
                    out.insert(date, entry);
                }
            }
            Some((start, end)) => {
                let mut stmt = self.conn.prepare_cached(&format!(
                    "{SELECT_COLUMNS}
                     WHERE user_id = ?1 AND date BETWEEN ?2 AND ?3
                     ORDER BY date ASC"
                ))?;
                let rows = stmt.query_map(
                    params![user, format_date(&start), format_date(&end)],
                    map_row,
                )?;
                for r in rows {
                    let (date, entry) = r?;
                    out.insert(date, entry);
                }
            }
        }

        Ok(out)
    }

    fn delete_older_than(&mut self, cutoff: NaiveDate) -> AppResult<usize> {
        let n = self.conn.execute(
            "DELETE FROM time_entries WHERE date < ?1",
            [format_date(&cutoff)],
        )?;
        Ok(n)
    }
}

/// Distinct users that own at least one entry.
pub fn load_users(conn: &Connection) -> AppResult<Vec<String>> {
    let mut stmt = conn.prepare("SELECT DISTINCT user_id FROM time_entries ORDER BY user_id")?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
