use rtimesheet::core::calculator::calculate_work_hours;
use rtimesheet::models::{DayEntry, DayInput, WorkType};

mod common;
use common::{assert_hours, time, work_day};

#[test]
fn test_office_day_worked_example() {
    let input = work_day(WorkType::Office, "09:00", "18:00").with_outside_time(30);
    let h = calculate_work_hours(&input);

    assert_hours(h.raw_hours, 9.0);
    assert_hours(h.break_deduction, 1.0);
    assert_hours(h.outside_time_hours, 0.5);
    assert_eq!(h.dinner_meal_deduction, Some(0.0));
    assert_hours(h.total_hours, 7.5);
}

#[test]
fn test_same_day_raw_hours_are_exact() {
    for (checkin, checkout, expected) in [
        ("08:15", "16:45", 8.5),
        ("13:00", "13:30", 0.5),
        ("00:00", "23:59", 23.0 + 59.0 / 60.0),
    ] {
        let h = calculate_work_hours(&work_day(WorkType::Remote, checkin, checkout));
        assert_hours(h.raw_hours, expected);
    }
}

#[test]
fn test_overnight_shift_rolls_over_midnight() {
    let h = calculate_work_hours(&work_day(WorkType::Office, "22:00", "06:00"));

    assert_hours(h.raw_hours, 8.0);
    // check-in after noon: no lunch break
    assert_hours(h.break_deduction, 0.0);
    assert_hours(h.total_hours, 8.0);
}

#[test]
fn test_equal_times_count_as_a_full_day() {
    let h = calculate_work_hours(&work_day(WorkType::Office, "14:00", "14:00"));
    assert_hours(h.raw_hours, 24.0);
}

#[test]
fn test_break_deduction_boundary_at_noon() {
    let before = calculate_work_hours(&work_day(WorkType::Office, "11:59", "18:00"));
    let at_noon = calculate_work_hours(&work_day(WorkType::Office, "12:00", "18:00"));

    assert_hours(before.break_deduction, 1.0);
    assert_hours(at_noon.break_deduction, 0.0);
}

#[test]
fn test_short_morning_shift_still_loses_the_break() {
    let h = calculate_work_hours(&work_day(WorkType::Remote, "09:00", "11:00"));

    assert_hours(h.break_deduction, 1.0);
    assert_hours(h.total_hours, 1.0);
}

#[test]
fn test_dinner_meal_deduction() {
    let input = work_day(WorkType::Office, "13:00", "22:00").with_dinner_meal(true);
    let h = calculate_work_hours(&input);

    assert_eq!(h.dinner_meal_deduction, Some(0.5));
    assert_hours(h.total_hours, 8.5);
}

#[test]
fn test_work_hours_are_floored_before_hourly_leave() {
    let input = work_day(WorkType::Office, "09:00", "09:30")
        .with_dinner_meal(true)
        .with_outside_time(60);
    let h = calculate_work_hours(&input);
    assert_hours(h.total_hours, 0.0);

    let with_leave = calculate_work_hours(&input.with_hourly_leave(2.0));
    assert_hours(with_leave.total_hours, 2.0);
}

#[test]
fn test_hourly_leave_is_added_to_worked_time() {
    let input = work_day(WorkType::Remote, "09:00", "14:00").with_hourly_leave(3.0);
    let h = calculate_work_hours(&input);

    assert_hours(h.raw_hours, 5.0);
    assert_hours(h.total_hours, 7.0);
}

#[test]
fn test_annual_leave_ignores_clock_and_deductions() {
    let input = DayInput::new(WorkType::AnnualLeave)
        .with_times(time("08:00"), time("20:00"))
        .with_outside_time(90)
        .with_dinner_meal(true)
        .with_annual_leave_hours(6.0);
    let h = calculate_work_hours(&input);

    assert_hours(h.raw_hours, 6.0);
    assert_hours(h.total_hours, 6.0);
    assert_hours(h.break_deduction, 0.0);
    assert_hours(h.outside_time_hours, 0.0);
    assert_eq!(h.dinner_meal_deduction, None);
}

#[test]
fn test_annual_leave_defaults_to_eight_hours() {
    let h = calculate_work_hours(&DayInput::new(WorkType::AnnualLeave));
    assert_hours(h.total_hours, 8.0);
}

#[test]
fn test_missing_times_default_to_nine_to_five() {
    let h = calculate_work_hours(&DayInput::new(WorkType::Office));

    assert_hours(h.raw_hours, 8.0);
    assert_hours(h.total_hours, 7.0);
}

#[test]
fn test_day_entry_normalizes_leave_input() {
    let entry = DayEntry::new(
        DayInput::new(WorkType::AnnualLeave)
            .with_times(time("09:00"), time("17:00"))
            .with_hourly_leave(2.0),
    );

    assert_eq!(entry.input().checkin_time, None);
    assert_eq!(entry.input().checkout_time, None);
    assert_eq!(entry.input().hourly_leave, Some(0.0));
    assert_eq!(entry.input().annual_leave_hours, Some(8.0));
    assert_eq!(entry.checkin_str(), "-");
    assert_hours(entry.total_hours(), 8.0);
}

#[test]
fn test_day_entry_recomputes_on_update() {
    let mut entry = DayEntry::new(work_day(WorkType::Office, "09:00", "18:00"));
    assert_hours(entry.total_hours(), 8.0);

    entry.set_input(work_day(WorkType::Office, "09:00", "18:00").with_outside_time(60));
    assert_hours(entry.total_hours(), 7.0);
    assert_eq!(entry.input().annual_leave_hours, Some(0.0));
    assert_eq!(entry.input().dinner_meal, Some(false));
}
