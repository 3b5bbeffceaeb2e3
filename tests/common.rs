#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveTime};
use rtimesheet::models::{DayInput, WorkType};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rts() -> Command {
    cargo_bin_cmd!("rtimesheet")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimesheet.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize DB and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    rts()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    // Monday, office, 9:00-18:00 with 30 minutes outside → 7:30
    rts()
        .args([
            "--db",
            db_path,
            "add",
            "2025-09-01",
            "--type",
            "O",
            "--in",
            "09:00",
            "--out",
            "18:00",
            "--outside",
            "30",
        ])
        .assert()
        .success();

    // Monday, remote, 09:00-17:00 → 7:00
    rts()
        .args([
            "--db",
            db_path,
            "add",
            "2025-09-15",
            "--type",
            "R",
            "--in",
            "09:00",
            "--out",
            "17:00",
        ])
        .assert()
        .success();

    // Friday, annual leave → 8:00
    rts()
        .args(["--db", db_path, "add", "2025-09-19", "--type", "A"])
        .assert()
        .success();
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

pub fn time(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M").expect("valid test time")
}

pub fn work_day(work_type: WorkType, checkin: &str, checkout: &str) -> DayInput {
    DayInput::new(work_type).with_times(time(checkin), time(checkout))
}

pub fn assert_hours(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected} hours, got {actual}"
    );
}
