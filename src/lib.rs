//! rTimesheet library root.
//! Exposes the CLI parser, the high-level run() function, and the
//! calculator, storage and export modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let user = cli.user.as_deref().unwrap_or(cfg.default_user.as_str());

    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg, user),
        Commands::Calc { .. } => cli::commands::calc::handle(&cli.command, cfg),
        Commands::Show { .. } => cli::commands::show::handle(&cli.command, cfg, user),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, cfg, user),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg, user),
        Commands::Stats { .. } => cli::commands::stats::handle(&cli.command, cfg, user),
        Commands::Calendar { .. } => cli::commands::calendar::handle(&cli.command, cfg, user),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg, user),
        Commands::Purge { .. } => cli::commands::purge::handle(&cli.command, cfg),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // config is loaded once
    let mut cfg = Config::load()?;

    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    dispatch(&cli, &cfg)
}
