//! Report aggregator: build a person's late/early/leave event list, attach
//! human-assigned reasons in one atomic two-phase commit, and compute the
//! per-reason minute totals.

use crate::config::Config;
use crate::core::{backfill, evaluate, schedule};
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::event::{EventKind, LateEarlyEvent, Reason, ReasonTotals};
use crate::models::ids::PersonId;
use rusqlite::Connection;

pub struct ReportLogic;

impl ReportLogic {
    /// Backfill absences, then evaluate every session of the person against
    /// its resolved schedule. The returned list is sorted by
    /// (date, entry, exit, kind) — event indices are stable across builds,
    /// which is what lets `report` print indices that `classify` consumes.
    pub fn build(conn: &Connection, cfg: &Config, person: &PersonId) -> AppResult<Vec<LateEarlyEvent>> {
        backfill::backfill_leave(conn, cfg, person)?;

        let sessions = queries::load_sessions_for_person(conn, person)?;
        if sessions.is_empty() {
            return Err(AppError::NoSessionsForPerson(person.to_string()));
        }

        let exception = queries::get_exception(conn, person)?;
        let committed = queries::load_report_reasons(conn, person)?;

        let mut events = Vec::new();
        for session in &sessions {
            let sched_row = schedule::schedule_or_default(conn, &session.date, cfg);
            let resolved = schedule::resolve(Some(&sched_row), exception.as_ref(), cfg)?;

            for mut ev in evaluate::evaluate_session(session, &resolved, cfg.late_grace_minutes) {
                // recover previously committed reasons for late/early events
                if ev.reason.is_none() {
                    let key = (
                        ev.date.as_str().to_string(),
                        ev.kind.to_db_str().to_string(),
                        ev.entry.clone(),
                        ev.exit.clone(),
                    );
                    ev.reason = committed.get(&key).copied();
                }
                events.push(ev);
            }
        }

        events.sort_by(|a, b| {
            (a.date.as_str(), &a.entry, &a.exit, a.kind.to_db_str()).cmp(&(
                b.date.as_str(),
                &b.entry,
                &b.exit,
                b.kind.to_db_str(),
            ))
        });

        Ok(events)
    }

    /// Two-phase reason assignment: apply the collected `(index, reason)`
    /// pairs to the rebuilt event list, refuse the commit unless every event
    /// ends up classified, then write everything back in one transaction.
    pub fn classify(
        pool: &mut DbPool,
        cfg: &Config,
        person: &PersonId,
        assignments: &[(usize, Reason)],
    ) -> AppResult<ReasonTotals> {
        let mut events = Self::build(&pool.conn, cfg, person)?;

        for (idx, reason) in assignments {
            let ev = events.get_mut(*idx).ok_or_else(|| {
                AppError::Other(format!("no event with index {idx}; run `report` first"))
            })?;
            ev.reason = Some(*reason);
        }

        let missing = events.iter().filter(|e| e.reason.is_none()).count();
        if missing > 0 {
            return Err(AppError::IncompleteClassification(missing));
        }

        let totals = ReasonTotals::from_events(&events);

        let tx = pool.conn.transaction()?;
        queries::delete_report_rows(&tx, person)?;
        for ev in &events {
            let Some(reason) = ev.reason else { continue };
            match ev.kind {
                EventKind::Leave => {
                    queries::set_session_reason(&tx, ev.source_session, reason, &totals)?
                }
                EventKind::LateEntry | EventKind::EarlyExit => {
                    queries::insert_report_row(&tx, ev, reason, &totals)?
                }
            }
        }
        tx.commit()?;

        Ok(totals)
    }

    /// Events ready for export: every event must carry a reason.
    pub fn classified_events(
        conn: &Connection,
        cfg: &Config,
        person: &PersonId,
    ) -> AppResult<(Vec<LateEarlyEvent>, ReasonTotals)> {
        let events = Self::build(conn, cfg, person)?;
        let missing = events.iter().filter(|e| e.reason.is_none()).count();
        if missing > 0 {
            return Err(AppError::IncompleteClassification(missing));
        }
        let totals = ReasonTotals::from_events(&events);
        Ok((events, totals))
    }
}
