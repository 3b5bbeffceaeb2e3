// src/export/model.rs

use crate::models::DayEntry;
use chrono::NaiveDate;
use serde::Serialize;

/// Flat export row for one day entry; hours stay fractional.
#[derive(Serialize, Clone, Debug)]
pub struct EntryExport {
    pub date: String,
    pub work_type: String,
    pub checkin: String,
    pub checkout: String,
    pub annual_leave_hours: f64,
    pub hourly_leave: f64,
    pub outside_time: u32,
    pub dinner_meal: bool,
    pub raw_hours: f64,
    pub break_deduction: f64,
    pub total_hours: f64,
}

impl EntryExport {
    pub fn from_entry(date: NaiveDate, entry: &DayEntry) -> Self {
        let input = entry.input();
        let hours = entry.hours();

        Self {
            date: date.format("%Y-%m-%d").to_string(),
            work_type: entry.work_type().to_db_str().to_string(),
            checkin: entry.checkin_str(),
            checkout: entry.checkout_str(),
            annual_leave_hours: input.annual_leave_hours.unwrap_or(0.0),
            hourly_leave: input.hourly_leave.unwrap_or(0.0),
            outside_time: input.outside_time,
            dinner_meal: input.dinner_meal.unwrap_or(false),
            raw_hours: hours.raw_hours,
            break_deduction: hours.break_deduction,
            total_hours: hours.total_hours,
        }
    }
}

/// Header for CSV / XLSX
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "date",
        "work_type",
        "checkin",
        "checkout",
        "annual_leave_hours",
        "hourly_leave",
        "outside_time",
        "dinner_meal",
        "raw_hours",
        "break_deduction",
        "total_hours",
    ]
}

pub(crate) fn entry_to_row(e: &EntryExport) -> Vec<String> {
    vec![
        e.date.clone(),
        e.work_type.clone(),
        e.checkin.clone(),
        e.checkout.clone(),
        e.annual_leave_hours.to_string(),
        e.hourly_leave.to_string(),
        e.outside_time.to_string(),
        if e.dinner_meal { "yes" } else { "no" }.to_string(),
        e.raw_hours.to_string(),
        e.break_deduction.to_string(),
        e.total_hours.to_string(),
    ]
}
