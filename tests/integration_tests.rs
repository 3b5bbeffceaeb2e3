use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::path::Path;

mod common;
use common::{init_db_with_data, rts, setup_test_db, temp_out};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init_creates_database");

    rts()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(Path::new(&db_path).exists());
}

#[test]
fn test_add_prints_breakdown() {
    let db_path = setup_test_db("add_prints_breakdown");

    rts()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rts()
        .args([
            "--db", &db_path, "add", "2025-09-01", "--type", "O", "--in", "09:00", "--out",
            "18:00", "--outside", "30",
        ])
        .assert()
        .success()
        .stdout(contains("Raw hours"))
        .stdout(contains("9:00"))
        .stdout(contains("7:30"))
        .stdout(contains("saved"));
}

#[test]
fn test_add_twice_updates_entry() {
    let db_path = setup_test_db("add_twice_updates_entry");
    init_db_with_data(&db_path);

    rts()
        .args([
            "--db", &db_path, "add", "2025-09-01", "--type", "R", "--in", "13:00", "--out",
            "17:00",
        ])
        .assert()
        .success()
        .stdout(contains("updated"));

    rts()
        .args(["--db", &db_path, "show", "2025-09-01"])
        .assert()
        .success()
        .stdout(contains("Remote"))
        .stdout(contains("4:00"));
}

#[test]
fn test_add_rejects_invalid_input() {
    let db_path = setup_test_db("add_rejects_invalid_input");

    rts()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rts()
        .args(["--db", &db_path, "add", "2025-13-01"])
        .assert()
        .failure()
        .stderr(contains("Invalid date"));

    rts()
        .args(["--db", &db_path, "add", "2025-09-01", "--type", "X"])
        .assert()
        .failure()
        .stderr(contains("Invalid work type"));

    rts()
        .args(["--db", &db_path, "add", "2025-09-01", "--in", "9am"])
        .assert()
        .failure()
        .stderr(contains("Invalid time"));

    rts()
        .args(["--db", &db_path, "add", "2025-09-01", "--outside", "45"])
        .assert()
        .failure()
        .stderr(contains("multiple of 30"));

    rts()
        .args([
            "--db",
            &db_path,
            "add",
            "2025-09-01",
            "--type",
            "A",
            "--leave-hours",
            "2",
        ])
        .assert()
        .failure()
        .stderr(contains("annual leave"));
}

#[test]
fn test_calc_does_not_touch_database() {
    let db_path = setup_test_db("calc_does_not_touch_database");

    rts()
        .args([
            "--db",
            &db_path,
            "calc",
            "--type",
            "O",
            "--in",
            "22:00",
            "--out",
            "06:00",
        ])
        .assert()
        .success()
        .stdout(contains("8:00"));

    assert!(!Path::new(&db_path).exists());
}

#[test]
fn test_calc_hourly_leave_after_floor() {
    rts()
        .args([
            "calc",
            "--in",
            "09:00",
            "--out",
            "09:30",
            "--outside",
            "60",
            "--dinner",
            "--hourly-leave",
            "2",
        ])
        .assert()
        .success()
        .stdout(contains("Hourly leave"))
        .stdout(contains("2:00"));
}

#[test]
fn test_show_missing_entry_fails() {
    let db_path = setup_test_db("show_missing_entry_fails");
    init_db_with_data(&db_path);

    rts()
        .args(["--db", &db_path, "show", "2025-09-02"])
        .assert()
        .failure()
        .stderr(contains("No entry found"));
}

#[test]
fn test_list_period() {
    let db_path = setup_test_db("list_period");
    init_db_with_data(&db_path);

    rts()
        .args(["--db", &db_path, "add", "2025-10-01", "--type", "R"])
        .assert()
        .success();

    rts()
        .args(["--db", &db_path, "list", "--period", "2025-09"])
        .assert()
        .success()
        .stdout(contains("2025-09-01"))
        .stdout(contains("2025-09-15"))
        .stdout(contains("2025-09-19"))
        .stdout(contains("2025-10-01").not())
        .stdout(contains("Worked total:"))
        .stdout(contains("14:30"));

    rts()
        .args(["--db", &db_path, "list", "--period", "all"])
        .assert()
        .success()
        .stdout(contains("2025-10-01"));
}

#[test]
fn test_users_have_separate_entries() {
    let db_path = setup_test_db("users_have_separate_entries");
    init_db_with_data(&db_path);

    rts()
        .args(["--db", &db_path, "--user", "bob", "add", "2025-09-02"])
        .assert()
        .success();

    rts()
        .args(["--db", &db_path, "--user", "bob", "list", "--period", "2025-09"])
        .assert()
        .success()
        .stdout(contains("2025-09-02"))
        .stdout(contains("2025-09-15").not());
}

#[test]
fn test_stats_month() {
    let db_path = setup_test_db("stats_month");
    init_db_with_data(&db_path);

    rts()
        .args(["--db", &db_path, "stats", "--month", "2025-09"])
        .assert()
        .success()
        .stdout(contains("September 2025"))
        .stdout(contains("office 50% | remote 50% | leave 33%"))
        .stdout(contains("recorded 3/22 business days"));
}

#[test]
fn test_stats_json() {
    let db_path = setup_test_db("stats_json");
    init_db_with_data(&db_path);

    rts()
        .args(["--db", &db_path, "stats", "--month", "2025-09", "--json"])
        .assert()
        .success()
        .stdout(contains("\"month\": \"2025-09\""))
        .stdout(contains("\"office_hours\": 7.5"))
        .stdout(contains("\"total_overwork\": -1.5"))
        .stdout(contains("\"business_days\": 22"));
}

#[test]
fn test_stats_invalid_month() {
    rts()
        .args(["stats", "--month", "2025-9"])
        .assert()
        .failure()
        .stderr(contains("Invalid month"));
}

#[test]
fn test_calendar_month() {
    let db_path = setup_test_db("calendar_month");
    init_db_with_data(&db_path);

    rts()
        .args(["--db", &db_path, "calendar", "--month", "2025-09"])
        .assert()
        .success()
        .stdout(contains("September 2025"))
        .stdout(contains("Sun"))
        .stdout(contains(" 1 O 7:30"))
        .stdout(contains("15 R 7:00"))
        .stdout(contains("19 A 8:00"));
}

#[test]
fn test_del_with_confirmation() {
    let db_path = setup_test_db("del_with_confirmation");
    init_db_with_data(&db_path);

    rts()
        .args(["--db", &db_path, "del", "2025-09-01"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled"));

    rts()
        .args(["--db", &db_path, "del", "2025-09-01"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("has been deleted"));

    rts()
        .args(["--db", &db_path, "show", "2025-09-01"])
        .assert()
        .failure();
}

#[test]
fn test_del_missing_entry_fails() {
    let db_path = setup_test_db("del_missing_entry_fails");
    init_db_with_data(&db_path);

    rts()
        .args(["--db", &db_path, "del", "2025-09-02"])
        .assert()
        .failure()
        .stderr(contains("No entry found"));
}

#[test]
fn test_purge_before_date() {
    let db_path = setup_test_db("purge_before_date");
    init_db_with_data(&db_path);

    rts()
        .args(["--db", &db_path, "purge", "--before", "2025-09-10", "-f"])
        .assert()
        .success()
        .stdout(contains("Purged 1 entries"));

    rts()
        .args(["--db", &db_path, "list", "--period", "all"])
        .assert()
        .success()
        .stdout(contains("2025-09-01").not())
        .stdout(contains("2025-09-15"));
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("log_records_operations");
    init_db_with_data(&db_path);

    rts()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("migration_applied"))
        .stdout(contains("add"));
}

#[test]
fn test_db_check_and_info() {
    let db_path = setup_test_db("db_check_and_info");
    init_db_with_data(&db_path);

    rts()
        .args(["--db", &db_path, "db", "--check", "--info"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"))
        .stdout(contains("Total entries:"));
}

#[test]
fn test_backup_copies_database() {
    let db_path = setup_test_db("backup_copies_database");
    init_db_with_data(&db_path);
    let out = temp_out("backup_copies_database", "sqlite");

    rts()
        .args(["--db", &db_path, "backup", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    assert!(Path::new(&out).exists());
}
