use super::work_type::WorkType;
use crate::core::calculator::daily::{
    DEFAULT_ANNUAL_LEAVE_HOURS, calculate_work_hours, default_checkin, default_checkout,
};
use chrono::NaiveTime;
use serde::Serialize;

/// Raw attendance input for one day, as typed by the user.
/// Absent values fall back to the calculator defaults.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayInput {
    pub work_type: WorkType,
    pub checkin_time: Option<NaiveTime>,
    pub checkout_time: Option<NaiveTime>,
    pub annual_leave_hours: Option<f64>,
    pub hourly_leave: Option<f64>,
    pub outside_time: u32, // minutes
    pub dinner_meal: Option<bool>,
}

impl DayInput {
    pub fn new(work_type: WorkType) -> Self {
        Self {
            work_type,
            checkin_time: None,
            checkout_time: None,
            annual_leave_hours: None,
            hourly_leave: None,
            outside_time: 0,
            dinner_meal: None,
        }
    }

    pub fn with_times(mut self, checkin: NaiveTime, checkout: NaiveTime) -> Self {
        self.checkin_time = Some(checkin);
        self.checkout_time = Some(checkout);
        self
    }

    pub fn with_outside_time(mut self, minutes: u32) -> Self {
        self.outside_time = minutes;
        self
    }

    pub fn with_dinner_meal(mut self, dinner: bool) -> Self {
        self.dinner_meal = Some(dinner);
        self
    }

    pub fn with_hourly_leave(mut self, hours: f64) -> Self {
        self.hourly_leave = Some(hours);
        self
    }

    pub fn with_annual_leave_hours(mut self, hours: f64) -> Self {
        self.annual_leave_hours = Some(hours);
        self
    }

    /// Fill in defaults and clear the fields that do not apply to the work
    /// type, mirroring what gets saved for a day.
    fn normalized(self) -> Self {
        match self.work_type {
            WorkType::AnnualLeave => Self {
                checkin_time: None,
                checkout_time: None,
                annual_leave_hours: Some(
                    self.annual_leave_hours
                        .unwrap_or(DEFAULT_ANNUAL_LEAVE_HOURS),
                ),
                hourly_leave: Some(0.0),
                ..self
            },
            WorkType::Office | WorkType::Remote => Self {
                checkin_time: Some(self.checkin_time.unwrap_or_else(default_checkin)),
                checkout_time: Some(self.checkout_time.unwrap_or_else(default_checkout)),
                annual_leave_hours: Some(0.0),
                hourly_leave: Some(self.hourly_leave.unwrap_or(0.0)),
                dinner_meal: Some(self.dinner_meal.unwrap_or(false)),
                ..self
            },
        }
    }
}

/// Calculator output, all values in fractional hours.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct HoursBreakdown {
    pub raw_hours: f64,
    pub break_deduction: f64,
    pub outside_time_hours: f64,
    pub dinner_meal_deduction: Option<f64>,
    pub total_hours: f64,
}

/// One stored day: the normalized input together with the hours derived
/// from it. The breakdown is only ever produced from the input it sits
/// next to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayEntry {
    #[serde(flatten)]
    input: DayInput,
    #[serde(flatten)]
    hours: HoursBreakdown,
}

impl DayEntry {
    pub fn new(input: DayInput) -> Self {
        let input = input.normalized();
        let hours = calculate_work_hours(&input);
        Self { input, hours }
    }

    /// Replace the input and recompute the breakdown.
    pub fn set_input(&mut self, input: DayInput) {
        *self = DayEntry::new(input);
    }

    pub fn input(&self) -> &DayInput {
        &self.input
    }

    pub fn hours(&self) -> &HoursBreakdown {
        &self.hours
    }

    pub fn work_type(&self) -> WorkType {
        self.input.work_type
    }

    pub fn total_hours(&self) -> f64 {
        self.hours.total_hours
    }

    pub fn checkin_str(&self) -> String {
        self.input
            .checkin_time
            .map(|t| t.format("%H:%M").to_string())
            .unwrap_or_else(|| "-".to_string())
    }

    pub fn checkout_str(&self) -> String {
        self.input
            .checkout_time
            .map(|t| t.format("%H:%M").to_string())
            .unwrap_or_else(|| "-".to_string())
    }
}
