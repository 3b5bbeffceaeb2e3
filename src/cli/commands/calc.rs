use crate::cli::commands::add::build_input;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::core::report::print_breakdown;
use crate::errors::AppResult;
use crate::models::DayEntry;

/// Compute and print a breakdown; the database is not touched.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calc { entry } = cmd {
        let input = build_input(entry, cfg)?;
        AddLogic::validate_input(&input)?;

        let day = DayEntry::new(input);
        print_breakdown(None, day.input(), day.hours());
    }

    Ok(())
}
