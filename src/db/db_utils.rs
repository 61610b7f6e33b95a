//! Store maintenance helpers for the `db` subcommand.

use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Run SQLite's integrity check; returns the first reported line ("ok" when
/// the store is healthy).
pub fn integrity_check(pool: &DbPool) -> AppResult<String> {
    let result: String = pool
        .conn
        .query_row("PRAGMA integrity_check", [], |row| row.get(0))?;
    Ok(result)
}

pub fn vacuum(pool: &DbPool) -> AppResult<()> {
    pool.conn.execute_batch("VACUUM;")?;
    Ok(())
}

/// Row counts per table, for `db --info`.
pub struct DbInfo {
    pub sessions: i64,
    pub schedules: i64,
    pub exceptions: i64,
}

pub fn info(pool: &DbPool) -> AppResult<DbInfo> {
    let count = |table: &str| -> AppResult<i64> {
        let n = pool
            .conn
            .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
                row.get(0)
            })?;
        Ok(n)
    };

    Ok(DbInfo {
        sessions: count("sessions")?,
        schedules: count("work_schedules")?,
        exceptions: count("exceptions")?,
    })
}
