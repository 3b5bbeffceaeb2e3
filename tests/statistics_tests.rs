use rtimesheet::core::calculator::calculate_monthly_statistics;
use rtimesheet::db::EntriesByDate;
use rtimesheet::models::{DayEntry, DayInput, MonthlyStatistics, WorkType};
use rtimesheet::utils::date::YearMonth;

mod common;
use common::{assert_hours, date, work_day};

fn september() -> YearMonth {
    YearMonth::new(2025, 9).expect("valid month")
}

fn entry(work_type: WorkType, checkin: &str, checkout: &str) -> DayEntry {
    DayEntry::new(work_day(work_type, checkin, checkout))
}

fn leave() -> DayEntry {
    DayEntry::new(DayInput::new(WorkType::AnnualLeave))
}

fn sample_month() -> EntriesByDate {
    let mut entries = EntriesByDate::new();
    // Mon: 7.5h office
    entries.insert(
        date("2025-09-01"),
        DayEntry::new(work_day(WorkType::Office, "09:00", "18:00").with_outside_time(30)),
    );
    // Tue: 7h remote
    entries.insert(date("2025-09-02"), entry(WorkType::Remote, "09:00", "17:00"));
    // Wed: leave
    entries.insert(date("2025-09-03"), leave());
    // Sat: ignored
    entries.insert(date("2025-09-06"), entry(WorkType::Office, "09:00", "18:00"));
    // other month: ignored
    entries.insert(date("2025-10-01"), entry(WorkType::Office, "09:00", "18:00"));
    entries
}

#[test]
fn test_monthly_totals_and_balances() {
    let stats = calculate_monthly_statistics(september(), &sample_month());

    assert_hours(stats.office_hours, 7.5);
    assert_hours(stats.remote_hours, 7.0);
    assert_hours(stats.annual_leave_hours, 8.0);
    assert_hours(stats.total_hours, 14.5);
    assert_hours(stats.standard_hours, 16.0);

    assert_hours(stats.office_overwork, -0.5);
    assert_hours(stats.remote_overwork, -1.0);
    assert_hours(stats.total_overwork, -1.5);

    assert_hours(stats.average_office_hours, 7.5);
    assert_hours(stats.average_remote_hours, 7.0);
}

#[test]
fn test_day_counts_skip_weekends() {
    let stats = calculate_monthly_statistics(september(), &sample_month());

    assert_eq!(stats.business_days, 22);
    assert_eq!(stats.work_days, 3);
    assert_eq!(stats.office_days, 1);
    assert_eq!(stats.remote_days, 1);
    assert_eq!(stats.leave_days, 1);
}

#[test]
fn test_leave_percentage_uses_its_own_denominator() {
    let stats = calculate_monthly_statistics(september(), &sample_month());

    assert_eq!(stats.office_percentage, 50);
    assert_eq!(stats.remote_percentage, 50);
    // 1 leave day out of 3 recorded days
    assert_eq!(stats.leave_percentage, 33);
}

#[test]
fn test_work_split_always_sums_to_hundred() {
    // 1 office + 7 remote: 12.5% / 87.5% would both round up
    let mut entries = EntriesByDate::new();
    entries.insert(date("2025-09-01"), entry(WorkType::Office, "09:00", "17:00"));
    for day in ["02", "03", "04", "05", "08", "09", "10"] {
        entries.insert(
            date(&format!("2025-09-{day}")),
            entry(WorkType::Remote, "09:00", "17:00"),
        );
    }

    let stats = calculate_monthly_statistics(september(), &entries);
    assert_eq!(stats.office_percentage + stats.remote_percentage, 100);
    assert_eq!(stats.office_percentage, 13);
}

#[test]
fn test_leave_only_month_has_no_work_split() {
    let mut entries = EntriesByDate::new();
    entries.insert(date("2025-09-01"), leave());

    let stats = calculate_monthly_statistics(september(), &entries);
    assert_eq!(stats.office_percentage, 0);
    assert_eq!(stats.remote_percentage, 0);
    assert_eq!(stats.leave_percentage, 100);
    assert_hours(stats.standard_hours, 0.0);
}

#[test]
fn test_short_days_give_negative_overwork() {
    let mut entries = EntriesByDate::new();
    for day in ["01", "02", "03", "04", "05"] {
        // afternoon check-in: no break, 4h
        entries.insert(
            date(&format!("2025-09-{day}")),
            entry(WorkType::Office, "13:00", "17:00"),
        );
    }

    let stats = calculate_monthly_statistics(september(), &entries);
    assert_hours(stats.total_hours, 20.0);
    assert_hours(stats.standard_hours, 40.0);
    assert_hours(stats.total_overwork, -20.0);
    assert!(stats.total_overwork < 0.0);
}

#[test]
fn test_empty_month_is_all_zero() {
    let stats = calculate_monthly_statistics(september(), &EntriesByDate::new());

    // only the calendar count survives
    assert_eq!(stats.business_days, 22);
    assert_eq!(
        stats,
        MonthlyStatistics {
            business_days: 22,
            ..MonthlyStatistics::default()
        }
    );
}

#[test]
fn test_statistics_are_idempotent() {
    let entries = sample_month();
    let first = calculate_monthly_statistics(september(), &entries);
    let second = calculate_monthly_statistics(september(), &entries);

    assert_eq!(first, second);
}

#[test]
fn test_february_leap_year_business_days() {
    let feb = YearMonth::new(2024, 2).expect("valid month");
    let stats = calculate_monthly_statistics(feb, &EntriesByDate::new());

    // Feb 2024: 29 days starting on a Thursday
    assert_eq!(stats.business_days, 21);
}
