use rtimesheet::core::add::AddLogic;
use rtimesheet::core::del::DeleteLogic;
use rtimesheet::core::logic::Core;
use rtimesheet::core::purge::PurgeLogic;
use rtimesheet::db::pool::DbPool;
use rtimesheet::db::{EntryRepository, MemoryRepository};
use rtimesheet::errors::AppError;
use rtimesheet::models::{DayEntry, DayInput, WorkType};
use rtimesheet::utils::date::YearMonth;

mod common;
use common::{assert_hours, date, work_day};

/// Same scenario against any repository implementation.
fn overwrite_keeps_one_entry<R: EntryRepository>(repo: &mut R) {
    let d = date("2025-09-01");

    let first = AddLogic::apply(repo, "alice", d, work_day(WorkType::Office, "09:00", "17:00"))
        .expect("first save");
    assert!(!first.replaced);

    let second = AddLogic::apply(repo, "alice", d, work_day(WorkType::Remote, "08:00", "18:00"))
        .expect("second save");
    assert!(second.replaced);

    let listed = repo.list_range("alice", None).expect("list");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[&d].work_type(), WorkType::Remote);
    assert_hours(listed[&d].total_hours(), 9.0);
}

fn users_are_isolated<R: EntryRepository>(repo: &mut R) {
    let d = date("2025-09-02");
    repo.set("alice", d, &DayEntry::new(DayInput::new(WorkType::AnnualLeave)))
        .expect("set");

    assert!(repo.get("bob", d).expect("get").is_none());
    assert!(repo.get("alice", d).expect("get").is_some());
}

fn purge_removes_only_older_entries<R: EntryRepository>(repo: &mut R) {
    for (user, d) in [
        ("alice", "2025-07-31"),
        ("bob", "2025-08-15"),
        ("alice", "2025-09-01"),
        ("bob", "2025-09-30"),
    ] {
        repo.set(user, date(d), &DayEntry::new(work_day(WorkType::Office, "09:00", "17:00")))
            .expect("set");
    }

    let cutoff = PurgeLogic::default_cutoff(date("2025-10-15"));
    assert_eq!(cutoff, date("2025-09-01"));

    let removed = PurgeLogic::apply(repo, cutoff).expect("purge");
    assert_eq!(removed, 2);

    assert!(repo.get("alice", date("2025-07-31")).expect("get").is_none());
    assert!(repo.get("bob", date("2025-08-15")).expect("get").is_none());
    assert!(repo.get("alice", date("2025-09-01")).expect("get").is_some());
    assert!(repo.get("bob", date("2025-09-30")).expect("get").is_some());
}

#[test]
fn test_memory_repository_overwrite() {
    overwrite_keeps_one_entry(&mut MemoryRepository::new());
}

#[test]
fn test_sqlite_repository_overwrite() {
    let pool = DbPool::in_memory().expect("in-memory db");
    overwrite_keeps_one_entry(&mut pool.entries());
}

#[test]
fn test_memory_repository_user_isolation() {
    users_are_isolated(&mut MemoryRepository::new());
}

#[test]
fn test_sqlite_repository_user_isolation() {
    let pool = DbPool::in_memory().expect("in-memory db");
    users_are_isolated(&mut pool.entries());
}

#[test]
fn test_memory_repository_purge() {
    let mut repo = MemoryRepository::new();
    purge_removes_only_older_entries(&mut repo);
    assert_eq!(repo.len(), 2);
}

#[test]
fn test_sqlite_repository_purge() {
    let pool = DbPool::in_memory().expect("in-memory db");
    purge_removes_only_older_entries(&mut pool.entries());
}

#[test]
fn test_sqlite_round_trip_through_minutes() {
    let pool = DbPool::in_memory().expect("in-memory db");
    let mut repo = pool.entries();
    let d = date("2025-09-03");

    let input = work_day(WorkType::Office, "08:10", "18:55")
        .with_outside_time(30)
        .with_dinner_meal(true)
        .with_hourly_leave(1.5);
    let saved = DayEntry::new(input);
    repo.set("alice", d, &saved).expect("set");

    let loaded = repo.get("alice", d).expect("get").expect("entry exists");
    assert_eq!(loaded.input(), saved.input());
    assert_hours(loaded.total_hours(), saved.total_hours());
    assert_eq!(loaded.checkin_str(), "08:10");
    assert_eq!(loaded.checkout_str(), "18:55");
}

#[test]
fn test_sqlite_round_trip_leave_day() {
    let pool = DbPool::in_memory().expect("in-memory db");
    let mut repo = pool.entries();
    let d = date("2025-09-04");

    repo.set(
        "alice",
        d,
        &DayEntry::new(DayInput::new(WorkType::AnnualLeave).with_annual_leave_hours(4.0)),
    )
    .expect("set");

    let loaded = repo.get("alice", d).expect("get").expect("entry exists");
    assert_eq!(loaded.work_type(), WorkType::AnnualLeave);
    assert_eq!(loaded.input().checkin_time, None);
    assert_hours(loaded.total_hours(), 4.0);
}

#[test]
fn test_list_by_month_filters_dates() {
    let mut repo = MemoryRepository::new();
    for d in ["2025-08-31", "2025-09-01", "2025-09-30", "2025-10-01"] {
        repo.set("alice", date(d), &DayEntry::new(DayInput::new(WorkType::Remote)))
            .expect("set");
    }

    let month = YearMonth::new(2025, 9).expect("valid month");
    let listed = repo.list_by_month("alice", month).expect("list");
    let dates: Vec<String> = listed.keys().map(|d| d.to_string()).collect();

    assert_eq!(dates, vec!["2025-09-01", "2025-09-30"]);
}

#[test]
fn test_delete_missing_entry_is_an_error() {
    let mut repo = MemoryRepository::new();
    let err = DeleteLogic::apply(&mut repo, "alice", date("2025-09-01")).unwrap_err();

    assert!(matches!(err, AppError::NoEntryForDate { .. }));
}

#[test]
fn test_delete_existing_entry() {
    let pool = DbPool::in_memory().expect("in-memory db");
    let mut repo = pool.entries();
    let d = date("2025-09-01");
    repo.set("alice", d, &DayEntry::new(DayInput::new(WorkType::Office)))
        .expect("set");

    DeleteLogic::apply(&mut repo, "alice", d).expect("delete");
    assert!(repo.get("alice", d).expect("get").is_none());
}

#[test]
fn test_load_entry_reports_missing_day() {
    let repo = MemoryRepository::new();
    let err = Core::load_entry(&repo, "alice", date("2025-09-01")).unwrap_err();

    assert!(err.to_string().contains("2025-09-01"));
}

#[test]
fn test_monthly_statistics_from_repository() {
    let pool = DbPool::in_memory().expect("in-memory db");
    let mut repo = pool.entries();
    repo.set(
        "alice",
        date("2025-09-01"),
        &DayEntry::new(work_day(WorkType::Office, "09:00", "19:00")),
    )
    .expect("set");

    let month = YearMonth::new(2025, 9).expect("valid month");
    let stats = Core::monthly_statistics(&repo, "alice", month).expect("stats");

    assert_eq!(stats.office_days, 1);
    assert_hours(stats.office_overwork, 1.0);
}

#[test]
fn test_validation_rejects_out_of_range_input() {
    let mut repo = MemoryRepository::new();
    let d = date("2025-09-01");

    let bad_outside = work_day(WorkType::Office, "09:00", "17:00").with_outside_time(45);
    assert!(AddLogic::apply(&mut repo, "alice", d, bad_outside).is_err());

    let bad_hourly = work_day(WorkType::Office, "09:00", "17:00").with_hourly_leave(5.0);
    assert!(AddLogic::apply(&mut repo, "alice", d, bad_hourly).is_err());

    let bad_leave = DayInput::new(WorkType::AnnualLeave).with_annual_leave_hours(2.0);
    assert!(AddLogic::apply(&mut repo, "alice", d, bad_leave).is_err());

    assert!(repo.is_empty());
}
