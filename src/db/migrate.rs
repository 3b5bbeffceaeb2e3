use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists.
/// It doubles as the migration ledger (`operation = 'migration_applied'`).
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Check if the `time_entries` table exists.
fn time_entries_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt = conn
        .prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='time_entries'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Hour-valued columns hold whole minutes (hours × 60).
fn create_time_entries_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS time_entries (
            id                  INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id             TEXT NOT NULL,
            date                TEXT NOT NULL,
            work_type           TEXT NOT NULL
                                CHECK(work_type IN ('office','remote','annual-leave')),
            checkin_time        TEXT,
            checkout_time       TEXT,
            annual_leave_hours  INTEGER NOT NULL DEFAULT 0,
            hourly_leave        INTEGER NOT NULL DEFAULT 0,
            outside_time        INTEGER NOT NULL DEFAULT 0,
            dinner_meal         INTEGER NOT NULL DEFAULT 0,
            total_hours         INTEGER NOT NULL,
            raw_hours           INTEGER,
            break_deduction     INTEGER,
            created_at          TEXT NOT NULL,
            updated_at          TEXT NOT NULL,
            UNIQUE(user_id, date)
        );
        "#,
    )?;
    Ok(())
}

fn migrate_add_date_index(conn: &Connection) -> Result<()> {
    let version = "20251001_0002_time_entries_date_index";

    if migration_applied(conn, version)? {
        return Ok(());
    }

    // purge and month listings scan by date across users
    conn.execute_batch(
        "CREATE INDEX IF NOT EXISTS idx_time_entries_date ON time_entries(date);",
    )?;

    mark_applied(conn, version, "Added date index to time_entries")?;

    success(format!("Migration applied: {}", version));
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Called by db::initialize::init_db() and whenever a pool is opened.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Base schema
    let version = "20251001_0001_create_time_entries";
    if !time_entries_table_exists(conn)? {
        create_time_entries_table(conn)?;
        success("Created time_entries table.");
    }
    if !migration_applied(conn, version)? {
        mark_applied(conn, version, "Created time_entries table")?;
    }

    // 3) Incremental migrations
    migrate_add_date_index(conn)?;

    Ok(())
}
