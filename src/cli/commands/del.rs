use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::core::logic::Core;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use crate::utils::date;

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
pub(crate) fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config, user: &str) -> AppResult<()> {
    if let Commands::Del { date: date_str } = cmd {
        let d = date::parse_date(date_str).ok_or_else(|| AppError::InvalidDate(date_str.into()))?;

        let pool = DbPool::new(&cfg.database)?;
        let mut repo = pool.entries();

        //
        // Fail early: nothing to confirm when the day is empty
        //
        let entry = Core::load_entry(&repo, user, d)?;

        let prompt = format!(
            "Delete the {} entry of {} for {}? This action is irreversible.",
            entry.work_type().label().to_lowercase(),
            d,
            user
        );

        if !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        DeleteLogic::apply(&mut repo, user, d)?;
        ttlog(&pool.conn, "del", &format!("{user}@{d}"), "Entry deleted")?;

        success(format!("Entry for {} has been deleted.", d));
    }

    Ok(())
}
