//! Leave backfill: turn unaccounted absences into accountable leave rows.
//!
//! For every non-holiday day of the loaded month with no session for the
//! person, a Synthetic leave session spanning the resolved schedule window
//! is inserted. Synthetic rows landing on days later flagged holiday are
//! purged before re-backfilling, and duplicate suppression on
//! (person, date, entry, exit) keeps repeated runs idempotent.

use crate::config::Config;
use crate::core::schedule::{resolve, schedule_or_default};
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::ids::PersonId;
use crate::models::session::{Session, SessionKind, SessionStatus};
use crate::utils::date::{month_dates, parse_month_key};
use crate::utils::time::{minutes_to_hhmm, time_to_minutes};
use rusqlite::Connection;
use std::collections::HashSet;

pub fn backfill_leave(conn: &Connection, cfg: &Config, person: &PersonId) -> AppResult<usize> {
    let Some(month_key) = queries::loaded_month_key(conn)? else {
        return Ok(0);
    };

    queries::purge_synthetic_on_holidays(conn)?;

    let covered: HashSet<String> = queries::load_sessions_for_person(conn, person)?
        .into_iter()
        .map(|s| s.date.as_str().to_string())
        .collect();

    let exception = queries::get_exception(conn, person)?;
    let (year, month) = parse_month_key(&month_key)?;

    let mut inserted = 0;
    for date in month_dates(year, month)? {
        if covered.contains(date.as_str()) {
            continue;
        }

        let sched = schedule_or_default(conn, &date, cfg);
        if sched.is_holiday {
            continue;
        }

        let resolved = resolve(Some(&sched), exception.as_ref(), cfg)?;
        let entry_min = time_to_minutes(resolved.entry);
        let exit_min = time_to_minutes(resolved.exit);
        let entry = minutes_to_hhmm(entry_min);
        let exit = minutes_to_hhmm(exit_min);

        if queries::session_exists(conn, person, &date, &entry, &exit)? {
            continue;
        }

        queries::insert_session(
            conn,
            &Session::new(
                person.clone(),
                date,
                entry,
                exit,
                SessionStatus::Synthetic,
                SessionKind::Leave,
                (exit_min - entry_min).max(0),
            ),
        )?;
        inserted += 1;
    }

    Ok(inserted)
}
