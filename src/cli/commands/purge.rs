use crate::cli::commands::del::ask_confirmation;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::purge::PurgeLogic;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::utils::date;
use chrono::Datelike;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Purge {
        before,
        auto,
        force,
    } = cmd
    {
        let today = date::today();

        if *auto && today.day() != cfg.purge_day {
            info(format!(
                "Automatic purge runs on day {} of the month; nothing to do today.",
                cfg.purge_day
            ));
            return Ok(());
        }

        let cutoff = match before {
            Some(b) => date::parse_date(b).ok_or_else(|| AppError::InvalidDate(b.to_string()))?,
            None => PurgeLogic::default_cutoff(today),
        };

        if !*force
            && !ask_confirmation(&format!(
                "Delete every entry (all users) dated before {}? This action is irreversible.",
                cutoff
            ))
        {
            info("Operation cancelled.");
            return Ok(());
        }

        let pool = DbPool::new(&cfg.database)?;
        let removed = PurgeLogic::apply(&mut pool.entries(), cutoff)?;

        ttlog(
            &pool.conn,
            "purge",
            &format!("before {cutoff}"),
            &format!("{removed} entries deleted"),
        )?;

        success(format!("Purged {} entries older than {}.", removed, cutoff));
    }

    Ok(())
}
