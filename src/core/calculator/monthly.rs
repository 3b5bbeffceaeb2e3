//! Monthly statistics: rolls a month of day entries into totals, balances
//! against the 8-hour standard, averages and distribution percentages.

use crate::models::{DayEntry, MonthlyStatistics, WorkType};
use crate::utils::date::{YearMonth, all_days_of_month, is_business_day};
use chrono::NaiveDate;
use std::collections::BTreeMap;

pub const STANDARD_DAY_HOURS: f64 = 8.0;

pub fn calculate_monthly_statistics(
    month: YearMonth,
    entries: &BTreeMap<NaiveDate, DayEntry>,
) -> MonthlyStatistics {
    let mut stats = MonthlyStatistics::default();

    // -----------------------------
    // Walk the business days
    // -----------------------------
    for date in all_days_of_month(month) {
        if !is_business_day(date) {
            continue;
        }

        stats.business_days += 1;

        let Some(entry) = entries.get(&date) else {
            continue;
        };

        stats.work_days += 1;

        match entry.work_type() {
            WorkType::Office => {
                stats.office_hours += entry.total_hours();
                stats.office_days += 1;
            }
            WorkType::Remote => {
                stats.remote_hours += entry.total_hours();
                stats.remote_days += 1;
            }
            WorkType::AnnualLeave => {
                stats.annual_leave_hours += entry.total_hours();
                stats.leave_days += 1;
            }
        }
    }

    // -----------------------------
    // Balances
    // -----------------------------
    let attended_days = stats.office_days + stats.remote_days;

    stats.total_hours = stats.office_hours + stats.remote_hours;
    stats.standard_hours = attended_days as f64 * STANDARD_DAY_HOURS;

    stats.office_overwork = stats.office_hours - stats.office_days as f64 * STANDARD_DAY_HOURS;
    stats.remote_overwork = stats.remote_hours - stats.remote_days as f64 * STANDARD_DAY_HOURS;
    stats.total_overwork = stats.total_hours - stats.standard_hours;

    // -----------------------------
    // Averages
    // -----------------------------
    stats.average_office_hours = average(stats.office_hours, stats.office_days);
    stats.average_remote_hours = average(stats.remote_hours, stats.remote_days);

    // -----------------------------
    // Distribution
    // -----------------------------
    // office/remote split is over attended days only; the remote share is
    // the complement so the pair always sums to 100.
    if attended_days > 0 {
        stats.office_percentage = percentage(stats.office_days, attended_days);
        stats.remote_percentage = 100 - stats.office_percentage;
    }

    // leave share is over every recorded day, leave included
    let recorded_days = attended_days + stats.leave_days;
    if recorded_days > 0 {
        stats.leave_percentage = percentage(stats.leave_days, recorded_days);
    }

    stats
}

fn average(hours: f64, days: u32) -> f64 {
    if days > 0 { hours / days as f64 } else { 0.0 }
}

fn percentage(part: u32, whole: u32) -> u32 {
    (part as f64 / whole as f64 * 100.0).round() as u32
}
