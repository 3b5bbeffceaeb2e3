//! Time utilities: parsing HH:MM, hour/minute conversions and the display
//! formats used by the CLI and exports.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<NaiveTime>> {
    if let Some(s) = input {
        let t = parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
        Ok(Some(t))
    } else {
        Ok(None)
    }
}

/// Minutes since midnight.
pub fn minutes_of_day(t: NaiveTime) -> i64 {
    (t.hour() * 60 + t.minute()) as i64
}

/// Storage encoding: hours are kept as whole minutes.
pub fn hours_to_minutes(hours: f64) -> i64 {
    (hours * 60.0).round() as i64
}

pub fn minutes_to_hours(minutes: i64) -> f64 {
    minutes as f64 / 60.0
}

/// Format fractional hours as `H:MM`; 7.5 → "7:30", 0 → "0:00".
/// Negative values are formatted on their magnitude.
pub fn format_hours(hours: f64) -> String {
    let total = (hours.abs() * 60.0).round() as i64;
    format!("{}:{:02}", total / 60, total % 60)
}

/// Balance format: "+1:30", "-0:45", zero stays unsigned.
pub fn format_signed_hours(hours: f64) -> String {
    let total = (hours * 60.0).round() as i64;
    let sign = if total > 0 {
        "+"
    } else if total < 0 {
        "-"
    } else {
        ""
    };
    format!("{}{}", sign, format_hours(hours))
}

/// "13:05" → "1:05 PM"; an unparseable value is returned untouched.
pub fn format_time_12h(t: &str) -> String {
    match parse_time(t) {
        Some(time) => {
            let (pm, hour12) = time.hour12();
            format!(
                "{}:{:02} {}",
                hour12,
                time.minute(),
                if pm { "PM" } else { "AM" }
            )
        }
        None => t.to_string(),
    }
}
