//! Calendar helpers: month walks, business days, the calendar grid and
//! `--period` parsing.

use chrono::{Datelike, Days, Local, Months, NaiveDate, Weekday};
use std::fmt;

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

pub fn format_date(d: &NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

/// A calendar month, always valid once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        // from_ymd_opt rejects both month 0/13 and out-of-range years
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| Self { year, month })
    }

    /// Parse `YYYY-MM`.
    pub fn parse(s: &str) -> Option<Self> {
        let (y, m) = s.trim().split_once('-')?;
        if y.len() != 4 || m.len() != 2 {
            return None;
        }
        Self::new(y.parse().ok()?, m.parse().ok()?)
    }

    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn current() -> Self {
        Self::of(today())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn last_day(&self) -> NaiveDate {
        self.first_day()
            .checked_add_months(Months::new(1))
            .and_then(|d| d.pred_opt())
            .unwrap_or(NaiveDate::MAX)
    }

    pub fn previous(&self) -> Self {
        Self::of(
            self.first_day()
                .checked_sub_months(Months::new(1))
                .unwrap_or(NaiveDate::MIN),
        )
    }

    pub fn next(&self) -> Self {
        Self::of(
            self.first_day()
                .checked_add_months(Months::new(1))
                .unwrap_or(NaiveDate::MAX),
        )
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    pub fn days_in_month(&self) -> u32 {
        self.last_day().day()
    }

    pub fn name(&self) -> &'static str {
        month_name(self.month)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "?",
    }
}

pub fn all_days_of_month(month: YearMonth) -> Vec<NaiveDate> {
    month
        .first_day()
        .iter_days()
        .take_while(|d| month.contains(*d))
        .collect()
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

pub fn is_business_day(date: NaiveDate) -> bool {
    !is_weekend(date)
}

/// One cell of the month calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub current_month: bool,
}

pub const GRID_CELLS: usize = 42; // 6 rows of 7 days

/// Days shown on a month calendar: weeks start on Sunday, the first row is
/// padded with the tail of the previous month and the grid is filled to six
/// full weeks with the head of the next one.
pub fn month_grid(month: YearMonth) -> Vec<CalendarDay> {
    let first = month.first_day();
    let lead = first.weekday().num_days_from_sunday() as u64;
    let start = first.checked_sub_days(Days::new(lead)).unwrap_or(first);

    start
        .iter_days()
        .take(GRID_CELLS)
        .map(|date| CalendarDay {
            date,
            current_month: month.contains(date),
        })
        .collect()
}

// ---------------------------
// Period parsing (--period)
// ---------------------------

/// Resolve a single period (YYYY, YYYY-MM, YYYY-MM-DD) to inclusive bounds.
pub fn period_bounds(p: &str) -> Result<(NaiveDate, NaiveDate), String> {
    let p = p.trim();

    // YYYY-MM-DD
    if let Some(d) = parse_date(p) {
        return Ok((d, d));
    }

    // YYYY-MM
    if let Some(ym) = YearMonth::parse(p) {
        return Ok((ym.first_day(), ym.last_day()));
    }

    // YYYY
    if p.len() == 4
        && let Ok(year) = p.parse::<i32>()
        && let (Some(first), Some(last)) = (
            NaiveDate::from_ymd_opt(year, 1, 1),
            NaiveDate::from_ymd_opt(year, 12, 31),
        )
    {
        return Ok((first, last));
    }

    Err(format!("Invalid period: {}", p))
}

/// Resolve `start:end` where both sides share one of the period formats.
pub fn range_bounds(start: &str, end: &str) -> Result<(NaiveDate, NaiveDate), String> {
    if start.trim().len() != end.trim().len() {
        return Err(format!(
            "Invalid range {start}:{end}: start and end must have the same format"
        ));
    }

    let (from, _) = period_bounds(start)?;
    let (_, to) = period_bounds(end)?;

    if from > to {
        return Err(format!("Invalid range {start}:{end}: start is after end"));
    }

    Ok((from, to))
}

/// Parse a `--period`/`--range` argument.
/// `None` means "no filtering" (the `all` keyword).
pub fn parse_period(p: &str) -> Result<Option<(NaiveDate, NaiveDate)>, String> {
    if p.trim().eq_ignore_ascii_case("all") {
        return Ok(None);
    }

    match p.split_once(':') {
        Some((start, end)) => range_bounds(start, end).map(Some),
        None => period_bounds(p).map(Some),
    }
}
