use crate::cli::parser::{Commands, EntryArgs};
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::core::report::print_breakdown;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::{DayInput, WorkType};
use crate::ui::messages::{success, warning};
use crate::utils::date;
use crate::utils::time::{parse_optional_time, parse_time};
use chrono::NaiveTime;

fn config_time(value: &str, key: &str) -> AppResult<NaiveTime> {
    parse_time(value).ok_or_else(|| AppError::Config(format!("invalid {key}: '{value}'")))
}

/// Build the day input from the command line, falling back to the
/// configured work type and check-in/check-out times.
pub(crate) fn build_input(args: &EntryArgs, cfg: &Config) -> AppResult<DayInput> {
    let code = args
        .work_type
        .as_deref()
        .unwrap_or(cfg.default_work_type.as_str());
    let work_type = WorkType::from_code(code).ok_or_else(|| {
        AppError::InvalidWorkType(format!(
            "'{}'. Use O (office), R (remote) or A (annual leave)",
            code
        ))
    })?;

    let start = parse_optional_time(args.start.as_ref())?;
    let end = parse_optional_time(args.end.as_ref())?;

    let mut input = DayInput::new(work_type).with_outside_time(args.outside);

    match work_type {
        WorkType::AnnualLeave => {
            if start.is_some() || end.is_some() || args.hourly_leave.is_some() {
                warning("Check-in/check-out and hourly leave are ignored on an annual leave day.");
            }
            if let Some(h) = args.leave_hours {
                input = input.with_annual_leave_hours(h);
            }
        }
        WorkType::Office | WorkType::Remote => {
            if args.leave_hours.is_some() {
                warning("--leave-hours only applies to annual leave days.");
            }
            let checkin = match start {
                Some(t) => t,
                None => config_time(&cfg.default_checkin, "default_checkin")?,
            };
            let checkout = match end {
                Some(t) => t,
                None => config_time(&cfg.default_checkout, "default_checkout")?,
            };
            input = input
                .with_times(checkin, checkout)
                .with_dinner_meal(args.dinner);
            if let Some(h) = args.hourly_leave {
                input = input.with_hourly_leave(h);
            }
        }
    }

    Ok(input)
}

/// Add or replace the entry of a day.
pub fn handle(cmd: &Commands, cfg: &Config, user: &str) -> AppResult<()> {
    if let Commands::Add { date, entry } = cmd {
        let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;
        let input = build_input(entry, cfg)?;

        let pool = DbPool::new(&cfg.database)?;
        let mut repo = pool.entries();
        let outcome = AddLogic::apply(&mut repo, user, d, input)?;

        let operation = if outcome.replaced { "edit" } else { "add" };
        ttlog(
            &pool.conn,
            operation,
            &format!("{user}@{d}"),
            &format!(
                "{} {} total {:.2}h",
                operation,
                outcome.entry.work_type().to_db_str(),
                outcome.entry.total_hours()
            ),
        )?;

        print_breakdown(Some(d), outcome.entry.input(), outcome.entry.hours());
        println!();

        if outcome.replaced {
            success(format!("Entry for {} updated ({}).", d, user));
        } else {
            success(format!("Entry for {} saved ({}).", d, user));
        }
    }

    Ok(())
}
