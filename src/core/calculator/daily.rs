//! Daily hours: turns one day's raw attendance into a breakdown of raw
//! hours, deductions and credited total.

use crate::models::{DayInput, HoursBreakdown, WorkType};
use crate::utils::time::minutes_of_day;
use chrono::{NaiveTime, Timelike};

pub const DEFAULT_ANNUAL_LEAVE_HOURS: f64 = 8.0;

/// Check-in before this hour costs a one-hour lunch break.
pub const BREAK_CUTOFF_HOUR: u32 = 12;
pub const BREAK_DEDUCTION_HOURS: f64 = 1.0;
pub const DINNER_MEAL_DEDUCTION_HOURS: f64 = 0.5;

const MINUTES_PER_DAY: i64 = 24 * 60;

pub fn default_checkin() -> NaiveTime {
    NaiveTime::from_hms_opt(9, 0, 0).unwrap_or(NaiveTime::MIN)
}

pub fn default_checkout() -> NaiveTime {
    NaiveTime::from_hms_opt(17, 0, 0).unwrap_or(NaiveTime::MIN)
}

pub fn calculate_work_hours(input: &DayInput) -> HoursBreakdown {
    match input.work_type {
        // Leave is measured in declared hours, not clock time.
        WorkType::AnnualLeave => {
            let hours = input
                .annual_leave_hours
                .unwrap_or(DEFAULT_ANNUAL_LEAVE_HOURS);
            HoursBreakdown {
                raw_hours: hours,
                break_deduction: 0.0,
                outside_time_hours: 0.0,
                dinner_meal_deduction: None,
                total_hours: hours,
            }
        }
        WorkType::Office | WorkType::Remote => shift_hours(input),
    }
}

fn shift_hours(input: &DayInput) -> HoursBreakdown {
    let checkin = input.checkin_time.unwrap_or_else(default_checkin);
    let checkout = input.checkout_time.unwrap_or_else(default_checkout);

    let checkin_minutes = minutes_of_day(checkin);
    let mut checkout_minutes = minutes_of_day(checkout);

    // Single midnight rollover; anything longer than a day is out of range.
    if checkout_minutes <= checkin_minutes {
        checkout_minutes += MINUTES_PER_DAY;
    }

    let raw_hours = (checkout_minutes - checkin_minutes) as f64 / 60.0;

    // Based on the clock hour of the check-in, not on the shift length.
    let break_deduction = if checkin.hour() < BREAK_CUTOFF_HOUR {
        BREAK_DEDUCTION_HOURS
    } else {
        0.0
    };

    let outside_time_hours = input.outside_time as f64 / 60.0;

    let dinner_meal_deduction = if input.dinner_meal.unwrap_or(false) {
        DINNER_MEAL_DEDUCTION_HOURS
    } else {
        0.0
    };

    let work_hours =
        (raw_hours - break_deduction - outside_time_hours - dinner_meal_deduction).max(0.0);

    // Hourly leave is credited after the floor so the clamp never eats it.
    let total_hours = work_hours + input.hourly_leave.unwrap_or(0.0);

    HoursBreakdown {
        raw_hours,
        break_deduction,
        outside_time_hours,
        dinner_meal_deduction: Some(dinner_meal_deduction),
        total_hours,
    }
}
