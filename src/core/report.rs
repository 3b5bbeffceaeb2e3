//! Human-readable rendering of entries, breakdowns, statistics and the
//! month calendar.

use crate::db::repository::EntriesByDate;
use crate::models::{DayInput, HoursBreakdown, MonthlyStatistics, WorkType};
use crate::utils::colors::{GREY, RESET, color_for_balance, colorize_optional};
use crate::utils::date::{CalendarDay, YearMonth, month_grid};
use crate::utils::formatting::{bold, describe_work_type, pad_left, pad_right};
use crate::utils::table::{Column, Table};
use crate::utils::time::{format_hours, format_signed_hours, format_time_12h};
use chrono::{Datelike, NaiveDate};

const LABEL_W: usize = 16;
const CELL_W: usize = 11;

fn line(label: &str, value: &str) {
    println!("  {}{}", pad_right(label, LABEL_W), value);
}

fn deduction(hours: f64) -> String {
    if hours > 0.0 {
        format!("-{}", format_hours(hours))
    } else {
        colorize_optional(&format_hours(hours))
    }
}

fn balance(hours: f64) -> String {
    format!("{}{}{}", color_for_balance(hours), format_signed_hours(hours), RESET)
}

/// Print the calculation for one day.
pub fn print_breakdown(date: Option<NaiveDate>, input: &DayInput, hours: &HoursBreakdown) {
    let (label, color) = describe_work_type(input.work_type);

    match date {
        Some(d) => println!("\n📅 {} ({}) {}{}{}", d, d.weekday(), color, label, RESET),
        None => println!("\n🧮 {}{}{}", color, label, RESET),
    }

    match input.work_type {
        WorkType::AnnualLeave => {
            line("Leave hours", &format_hours(hours.raw_hours));
        }
        WorkType::Office | WorkType::Remote => {
            for (name, t) in [("Check-in", input.checkin_time), ("Check-out", input.checkout_time)]
            {
                if let Some(t) = t {
                    let hhmm = t.format("%H:%M").to_string();
                    line(name, &format!("{} ({})", hhmm, format_time_12h(&hhmm)));
                }
            }
            line("Raw hours", &format_hours(hours.raw_hours));
            line("Lunch break", &deduction(hours.break_deduction));
            line("Outside time", &deduction(hours.outside_time_hours));
            line(
                "Dinner meal",
                &deduction(hours.dinner_meal_deduction.unwrap_or(0.0)),
            );
            let hourly = input.hourly_leave.unwrap_or(0.0);
            if hourly > 0.0 {
                line("Hourly leave", &format!("+{}", format_hours(hourly)));
            }
        }
    }

    println!("  {}", "-".repeat(LABEL_W + 8));
    line("Total", &bold(&format_hours(hours.total_hours)));
}

/// Print the monthly summary: hours, balance, averages and distribution.
pub fn print_statistics(user: &str, month: YearMonth, stats: &MonthlyStatistics) {
    println!(
        "\n📊 Monthly summary for {} {} ({})\n",
        month.name(),
        month.year(),
        user
    );

    println!("{}", bold("Work hours"));
    line("Office", &format_hours(stats.office_hours));
    line("Remote", &format_hours(stats.remote_hours));
    line("Annual leave", &format_hours(stats.annual_leave_hours));
    line("Total worked", &bold(&format_hours(stats.total_hours)));

    println!("\n{}", bold("Balance"));
    line("Standard", &format_hours(stats.standard_hours));
    line("Office", &balance(stats.office_overwork));
    line("Remote", &balance(stats.remote_overwork));
    line("Total", &balance(stats.total_overwork));

    println!("\n{}", bold("Averages & distribution"));
    line("Avg office day", &format_hours(stats.average_office_hours));
    line("Avg remote day", &format_hours(stats.average_remote_hours));
    line(
        "Days",
        &format!(
            "office {} | remote {} | leave {} | recorded {}/{} business days",
            stats.office_days,
            stats.remote_days,
            stats.leave_days,
            stats.work_days,
            stats.business_days
        ),
    );
    line(
        "Split",
        &format!(
            "office {}% | remote {}% | leave {}%",
            stats.office_percentage, stats.remote_percentage, stats.leave_percentage
        ),
    );
}

fn calendar_cell(day: &CalendarDay, entries: &EntriesByDate) -> String {
    let num = format!("{:>2}", day.date.day());

    if !day.current_month {
        return format!("{GREY}{}{RESET}", pad_right(&num, CELL_W));
    }

    match entries.get(&day.date) {
        Some(entry) => {
            let (_, color) = describe_work_type(entry.work_type());
            let text = format!(
                "{} {} {}",
                num,
                entry.work_type().code(),
                format_hours(entry.total_hours())
            );
            format!("{}{}{}", color, pad_right(&text, CELL_W), RESET)
        }
        None => pad_right(&num, CELL_W),
    }
}

/// Print a Sunday-first month grid; recorded days show type code and total.
pub fn print_calendar(month: YearMonth, entries: &EntriesByDate) {
    let title = format!("{} {}", month.name(), month.year());
    println!("\n{}\n", bold(&title));

    let header: String = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]
        .iter()
        .map(|d| pad_right(d, CELL_W))
        .collect();
    println!("{}", header.trim_end());

    for week in month_grid(month).chunks(7) {
        let row: String = week.iter().map(|d| calendar_cell(d, entries)).collect();
        println!("{}", row);
    }

    println!("\n{GREY}O = office, R = remote, A = annual leave{RESET}");
}

/// Print the entries as a table.
pub fn print_entries(entries: &EntriesByDate, separator: char, show_weekday: bool) {
    let mut table = Table::new(
        vec![
            Column::left("Date"),
            Column::left("Type"),
            Column::left("In"),
            Column::left("Out"),
            Column::right("Outside"),
            Column::left("Dinner"),
            Column::right("Hourly"),
            Column::right("Raw"),
            Column::right("Break"),
            Column::right("Total"),
        ],
        separator,
    );

    let mut total = 0.0;

    for (date, entry) in entries {
        let input = entry.input();
        let hours = entry.hours();
        let (label, color) = describe_work_type(entry.work_type());

        let date_cell = if show_weekday {
            format!("{} {}", date, date.weekday())
        } else {
            date.to_string()
        };

        table.add_row(vec![
            date_cell,
            format!("{color}{label}{RESET}"),
            colorize_optional(&entry.checkin_str()),
            colorize_optional(&entry.checkout_str()),
            colorize_optional(&format!("{} min", input.outside_time)),
            if input.dinner_meal.unwrap_or(false) {
                "yes".to_string()
            } else {
                colorize_optional("-")
            },
            colorize_optional(&format_hours(input.hourly_leave.unwrap_or(0.0))),
            format_hours(hours.raw_hours),
            colorize_optional(&format_hours(hours.break_deduction)),
            bold(&format_hours(hours.total_hours)),
        ]);

        if !entry.work_type().is_leave() {
            total += hours.total_hours;
        }
    }

    print!("{}", table.render());
    println!(
        "{} {}",
        pad_left("Worked total:", 14),
        bold(&format_hours(total))
    );
}
