use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config, user: &str) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        force,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;
        let count = ExportLogic::export(&pool.entries(), user, *format, file, range, *force)?;

        if count > 0 {
            ttlog(
                &pool.conn,
                "export",
                file,
                &format!("{} entries of {} as {}", count, user, format.as_str()),
            )?;
        }
    }
    Ok(())
}
