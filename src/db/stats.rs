use crate::db::pool::DbPool;
use crate::db::queries::load_users;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use crate::utils::date::parse_date;
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) TOTAL ENTRIES / USERS
    //
    let count: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM time_entries", [], |row| row.get(0))?;
    println!(
        "{}• Total entries:{} {}{}{}",
        CYAN, RESET, GREEN, count, RESET
    );

    let users = load_users(&pool.conn)?;
    let users_fmt = if users.is_empty() {
        format!("{GREY}--{RESET}")
    } else {
        users.join(", ")
    };
    println!("{}• Users:{} {}", CYAN, RESET, users_fmt);

    //
    // 3) DATE RANGE
    //
    let first_date: Option<String> = pool
        .conn
        .query_row(
            "SELECT date FROM time_entries ORDER BY date ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last_date: Option<String> = pool
        .conn
        .query_row(
            "SELECT date FROM time_entries ORDER BY date DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let fmt_first = first_date
        .clone()
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last_date
        .clone()
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    //
    // 4) COVERAGE (entries per calendar day in range)
    //
    if let (Some(d1), Some(d2)) = (
        first_date.as_deref().and_then(parse_date),
        last_date.as_deref().and_then(parse_date),
    ) {
        let days = (d2 - d1).num_days() + 1;
        let avg = count as f64 / days as f64;
        println!("{}• Entries/day:{} {:.2}", CYAN, RESET, avg);
    }

    println!();
    Ok(())
}
