use crate::errors::{AppError, AppResult};
use crate::models::event::{LateEarlyEvent, Reason, ReasonTotals};
use crate::models::ids::{CivilDate, PersonId};
use crate::models::schedule::{Exception, WorkSchedule};
use crate::models::session::{Session, SessionKind, SessionStatus};
use rusqlite::{Connection, OptionalExtension, Row, params};
use std::collections::HashMap;

fn conversion_err(e: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
}

pub fn map_session_row(row: &Row) -> rusqlite::Result<Session> {
    let person_str: String = row.get("id")?;
    let person = PersonId::parse(&person_str).map_err(conversion_err)?;

    let date_str: String = row.get("date")?;
    let date = CivilDate::parse(&date_str).map_err(conversion_err)?;

    let status_str: String = row.get("status")?;
    let status = SessionStatus::from_db_str(&status_str).ok_or_else(|| {
        conversion_err(AppError::Other(format!("invalid session status: {status_str}")))
    })?;

    let mode_str: String = row.get("mode")?;
    let kind = SessionKind::from_db_str(&mode_str)
        .ok_or_else(|| conversion_err(AppError::Other(format!("invalid session mode: {mode_str}"))))?;

    let reason: Option<String> = row.get("reason")?;

    Ok(Session {
        session_id: row.get("session_id")?,
        person,
        date,
        entry: row.get("entry")?,
        exit: row.get("exit")?,
        status,
        kind,
        duration_minutes: row.get("duration")?,
        reason: reason.as_deref().map(Reason::from_label),
    })
}

pub fn insert_session(conn: &Connection, s: &Session) -> AppResult<()> {
    conn.execute(
        "INSERT INTO sessions (id, date, entry, exit, status, duration, mode, reason)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            s.person.as_str(),
            s.date.as_str(),
            s.entry,
            s.exit,
            s.status.to_db_str(),
            s.duration_minutes,
            s.kind.to_db_str(),
            s.reason.map(|r| r.to_db_str()),
        ],
    )?;
    Ok(())
}

/// Duplicate suppression key per the import/backfill contract.
pub fn session_exists(
    conn: &Connection,
    person: &PersonId,
    date: &CivilDate,
    entry: &str,
    exit: &str,
) -> AppResult<bool> {
    let mut stmt = conn.prepare(
        "SELECT 1 FROM sessions
         WHERE id = ?1 AND date = ?2 AND entry = ?3 AND exit = ?4
           AND mode IN ('normal','leave')
         LIMIT 1",
    )?;
    Ok(stmt.exists(params![person.as_str(), date.as_str(), entry, exit])?)
}

/// True when the month already has imported session rows; import is skipped
/// in that case so re-running the same file never duplicates sessions.
pub fn month_has_sessions(conn: &Connection, month_key: &str) -> AppResult<bool> {
    let mut stmt = conn.prepare(
        "SELECT 1 FROM sessions
         WHERE date LIKE ?1 AND mode IN ('normal','leave')
         LIMIT 1",
    )?;
    Ok(stmt.exists([format!("{month_key}%")])?)
}

pub fn count_month_sessions(conn: &Connection, month_key: &str) -> AppResult<i64> {
    let n = conn.query_row(
        "SELECT COUNT(*) FROM sessions WHERE date LIKE ?1 AND mode IN ('normal','leave')",
        [format!("{month_key}%")],
        |row| row.get(0),
    )?;
    Ok(n)
}

/// Month key (`YYYYMM`) of the loaded month, if any sessions exist.
pub fn loaded_month_key(conn: &Connection) -> AppResult<Option<String>> {
    let key: Option<String> = conn
        .query_row(
            "SELECT MIN(substr(date, 1, 6)) FROM sessions WHERE mode IN ('normal','leave')",
            [],
            |row| row.get(0),
        )
        .optional()?
        .flatten();
    Ok(key)
}

pub fn load_sessions_for_person(conn: &Connection, person: &PersonId) -> AppResult<Vec<Session>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM sessions
         WHERE id = ?1 AND mode IN ('normal','leave')
         ORDER BY date ASC, entry ASC, exit ASC",
    )?;
    let rows = stmt.query_map([person.as_str()], map_session_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_session(conn: &Connection, session_id: i64) -> AppResult<Session> {
    let mut stmt = conn.prepare(
        "SELECT * FROM sessions
         WHERE session_id = ?1 AND mode IN ('normal','leave')",
    )?;
    stmt.query_row([session_id], map_session_row)
        .optional()?
        .ok_or(AppError::SessionNotFound(session_id))
}

pub fn update_session_times(
    conn: &Connection,
    session_id: i64,
    entry: &str,
    exit: &str,
    duration: i64,
) -> AppResult<()> {
    conn.execute(
        "UPDATE sessions SET entry = ?1, exit = ?2, duration = ?3 WHERE session_id = ?4",
        params![entry, exit, duration, session_id],
    )?;
    Ok(())
}

pub fn set_session_reason(
    conn: &Connection,
    session_id: i64,
    reason: Reason,
    totals: &ReasonTotals,
) -> AppResult<()> {
    conn.execute(
        "UPDATE sessions
         SET reason = ?1, total_impermissible = ?2, total_announced = ?3, total_other = ?4
         WHERE session_id = ?5",
        params![
            reason.to_db_str(),
            totals.impermissible,
            totals.announced,
            totals.other,
            session_id
        ],
    )?;
    Ok(())
}

pub fn distinct_persons(conn: &Connection) -> AppResult<Vec<PersonId>> {
    let mut stmt = conn.prepare(
        "SELECT DISTINCT id FROM sessions WHERE mode IN ('normal','leave') ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(PersonId::parse(&r?)?);
    }
    Ok(out)
}

/// Drop backfilled absence rows that landed on days later flagged holiday.
pub fn purge_synthetic_on_holidays(conn: &Connection) -> AppResult<usize> {
    let n = conn.execute(
        "DELETE FROM sessions
         WHERE status = 'synthetic'
           AND date IN (SELECT date FROM work_schedules WHERE is_holiday = 1)",
        [],
    )?;
    Ok(n)
}

// ---------------------------------------------------------------------------
// Report snapshot rows (classified late_entry / early_exit events)
// ---------------------------------------------------------------------------

pub fn delete_report_rows(conn: &Connection, person: &PersonId) -> AppResult<usize> {
    let n = conn.execute(
        "DELETE FROM sessions WHERE id = ?1 AND mode IN ('late_entry','early_exit')",
        [person.as_str()],
    )?;
    Ok(n)
}

pub fn insert_report_row(
    conn: &Connection,
    ev: &LateEarlyEvent,
    reason: Reason,
    totals: &ReasonTotals,
) -> AppResult<()> {
    conn.execute(
        "INSERT INTO sessions
         (id, date, entry, exit, status, duration, mode, reason,
          total_impermissible, total_announced, total_other)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        params![
            ev.person.as_str(),
            ev.date.as_str(),
            ev.entry,
            ev.exit,
            ev.session_status.to_db_str(),
            ev.minutes,
            ev.kind.to_db_str(),
            reason.to_db_str(),
            totals.impermissible,
            totals.announced,
            totals.other,
        ],
    )?;
    Ok(())
}

/// Previously committed reasons for a person's late/early events, keyed by
/// (date, event mode, entry, exit) so a rebuilt report can pick them up.
pub fn load_report_reasons(
    conn: &Connection,
    person: &PersonId,
) -> AppResult<HashMap<(String, String, String, String), Reason>> {
    let mut stmt = conn.prepare(
        "SELECT date, mode, entry, exit, reason FROM sessions
         WHERE id = ?1 AND mode IN ('late_entry','early_exit') AND reason IS NOT NULL",
    )?;
    let rows = stmt.query_map([person.as_str()], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
            row.get::<_, String>(3)?,
            row.get::<_, String>(4)?,
        ))
    })?;

    let mut out = HashMap::new();
    for r in rows {
        let (date, mode, entry, exit, reason) = r?;
        out.insert((date, mode, entry, exit), Reason::from_label(&reason));
    }
    Ok(out)
}

// ---------------------------------------------------------------------------
// Work schedules
// ---------------------------------------------------------------------------

pub fn map_schedule_row(row: &Row) -> rusqlite::Result<WorkSchedule> {
    let date_str: String = row.get("date")?;
    let date = CivilDate::parse(&date_str).map_err(conversion_err)?;

    Ok(WorkSchedule {
        date,
        entry: row.get("entry")?,
        exit: row.get("exit")?,
        floating_hours: row.get("floating")?,
        late_allowed: row.get::<_, i64>("late_allowed")? != 0,
        is_holiday: row.get::<_, i64>("is_holiday")? != 0,
    })
}

pub fn get_schedule(conn: &Connection, date: &CivilDate) -> AppResult<Option<WorkSchedule>> {
    let mut stmt = conn.prepare("SELECT * FROM work_schedules WHERE date = ?1")?;
    Ok(stmt.query_row([date.as_str()], map_schedule_row).optional()?)
}

pub fn load_month_schedules(conn: &Connection, month_key: &str) -> AppResult<Vec<WorkSchedule>> {
    let mut stmt =
        conn.prepare("SELECT * FROM work_schedules WHERE date LIKE ?1 ORDER BY date ASC")?;
    let rows = stmt.query_map([format!("{month_key}%")], map_schedule_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn upsert_schedule(conn: &Connection, sched: &WorkSchedule) -> AppResult<()> {
    conn.execute(
        "INSERT INTO work_schedules (date, is_holiday, entry, exit, floating, late_allowed)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)
         ON CONFLICT(date) DO UPDATE SET
             is_holiday = excluded.is_holiday,
             entry = excluded.entry,
             exit = excluded.exit,
             floating = excluded.floating,
             late_allowed = excluded.late_allowed",
        params![
            sched.date.as_str(),
            sched.is_holiday as i64,
            sched.entry,
            sched.exit,
            sched.floating_hours,
            sched.late_allowed as i64,
        ],
    )?;
    Ok(())
}

/// Insert default rows for every day of the month that has none yet.
/// Existing rows are never touched; rows are never deleted within a month.
pub fn ensure_month_schedules(
    conn: &Connection,
    defaults: impl Iterator<Item = WorkSchedule>,
) -> AppResult<usize> {
    let mut inserted = 0;
    for sched in defaults {
        let n = conn.execute(
            "INSERT OR IGNORE INTO work_schedules
             (date, is_holiday, entry, exit, floating, late_allowed)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                sched.date.as_str(),
                sched.is_holiday as i64,
                sched.entry,
                sched.exit,
                sched.floating_hours,
                sched.late_allowed as i64,
            ],
        )?;
        inserted += n;
    }
    Ok(inserted)
}

// ---------------------------------------------------------------------------
// Exceptions
// ---------------------------------------------------------------------------

pub fn get_exception(conn: &Connection, person: &PersonId) -> AppResult<Option<Exception>> {
    let mut stmt = conn.prepare("SELECT id, entry, exit FROM exceptions WHERE id = ?1")?;
    let row = stmt
        .query_row([person.as_str()], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
            ))
        })
        .optional()?;

    match row {
        None => Ok(None),
        Some((id, entry, exit)) => Ok(Some(Exception {
            person: PersonId::parse(&id)?,
            entry,
            exit,
        })),
    }
}

pub fn upsert_exception(conn: &Connection, exc: &Exception) -> AppResult<()> {
    conn.execute(
        "INSERT INTO exceptions (id, entry, exit) VALUES (?1, ?2, ?3)
         ON CONFLICT(id) DO UPDATE SET entry = excluded.entry, exit = excluded.exit",
        params![exc.person.as_str(), exc.entry, exc.exit],
    )?;
    Ok(())
}

pub fn delete_exception(conn: &Connection, person: &PersonId) -> AppResult<bool> {
    let n = conn.execute("DELETE FROM exceptions WHERE id = ?1", [person.as_str()])?;
    Ok(n > 0)
}
