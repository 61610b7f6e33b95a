use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the database schema.
///
/// `sessions.status` records how a row was reconstructed
/// (paired/fallback/synthetic), `sessions.mode` discriminates what the row
/// is: a normal work span, a leave period, or a classified late_entry /
/// early_exit report row. Reason and totals stay NULL until classification.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS sessions (
            session_id          INTEGER PRIMARY KEY AUTOINCREMENT,
            id                  TEXT NOT NULL,
            date                TEXT NOT NULL,
            entry               TEXT NOT NULL,
            exit                TEXT NOT NULL,
            status              TEXT NOT NULL CHECK(status IN ('paired','fallback','synthetic')),
            duration            INTEGER NOT NULL DEFAULT 0,
            mode                TEXT NOT NULL CHECK(mode IN ('normal','leave','late_entry','early_exit')),
            reason              TEXT,
            total_impermissible INTEGER,
            total_announced     INTEGER,
            total_other         INTEGER
        );

        CREATE TABLE IF NOT EXISTS work_schedules (
            date         TEXT PRIMARY KEY,
            is_holiday   INTEGER NOT NULL DEFAULT 0,
            entry        TEXT NOT NULL,
            exit         TEXT NOT NULL,
            floating     REAL NOT NULL DEFAULT 1.0,
            late_allowed INTEGER NOT NULL DEFAULT 0
        );

        CREATE TABLE IF NOT EXISTS exceptions (
            id    TEXT PRIMARY KEY,
            entry TEXT NOT NULL,
            exit  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_sessions_id_date ON sessions(id, date);
        CREATE INDEX IF NOT EXISTS idx_sessions_date ON sessions(date);
        "#,
    )?;
    Ok(())
}
