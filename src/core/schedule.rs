//! Schedule resolver: effective (entry, exit, floating, late-allowed,
//! holiday) window for a (person, date), plus the adaptive reconciliation of
//! standing exceptions against edited day schedules.

use crate::config::Config;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::ids::CivilDate;
use crate::models::schedule::{Exception, ResolvedSchedule, WorkSchedule};
use crate::ui::messages::warning;
use crate::utils::time::{
    minutes_to_hhmm, parse_time_strict, round_to_half_hour, time_to_minutes,
};
use rusqlite::Connection;

/// Merge the date schedule, the person's standing exception and the system
/// defaults. Pure function of its inputs; never cached across edits.
/// The exception overrides entry/exit only — floating, late-allowed and
/// holiday always come from the date schedule.
pub fn resolve(
    sched: Option<&WorkSchedule>,
    exception: Option<&Exception>,
    cfg: &Config,
) -> AppResult<ResolvedSchedule> {
    let (entry_str, exit_str, floating, late_allowed, is_holiday) = match sched {
        Some(s) => (
            s.entry.as_str(),
            s.exit.as_str(),
            s.floating_hours,
            s.late_allowed,
            s.is_holiday,
        ),
        None => (
            cfg.default_entry.as_str(),
            cfg.default_exit.as_str(),
            cfg.default_floating_hours,
            cfg.default_late_allowed,
            false,
        ),
    };

    let (entry_str, exit_str) = match exception {
        Some(exc) => (exc.entry.as_str(), exc.exit.as_str()),
        None => (entry_str, exit_str),
    };

    Ok(ResolvedSchedule {
        entry: parse_time_strict(entry_str)?,
        exit: parse_time_strict(exit_str)?,
        float_minutes: (floating * 60.0) as i64,
        late_allowed,
        is_holiday,
    })
}

/// Load a date's schedule row, degrading to the system defaults if the row
/// is missing or the store cannot be read.
pub fn schedule_or_default(conn: &Connection, date: &CivilDate, cfg: &Config) -> WorkSchedule {
    match queries::get_schedule(conn, date) {
        Ok(Some(s)) => s,
        Ok(None) => WorkSchedule::default_for(date.clone(), cfg),
        Err(e) => {
            warning(format!(
                "Could not load schedule for {date}: {e}; using defaults."
            ));
            WorkSchedule::default_for(date.clone(), cfg)
        }
    }
}

/// Adaptive exception reconciliation, run only when explicitly requested
/// for an exception person (never on evaluation).
///
/// Two independent checks against the given day schedule:
/// 1. The schedule's exit moved off the default and the exception ends at or
///    after it: the exception no longer carves anything out, so it collapses
///    to exactly the schedule window.
/// 2. The schedule's entry moved off the default and the exception window is
///    not fully contained in the schedule window: the exception's fractional
///    workday is rescaled — new exit = schedule entry + exception duration ×
///    (schedule duration / default duration), rounded to the nearest half
///    hour and clamped to the schedule exit.
pub fn reconcile_exception(
    exception: &Exception,
    sched: &WorkSchedule,
    cfg: &Config,
) -> AppResult<Exception> {
    let d_entry = time_to_minutes(parse_time_strict(&cfg.default_entry)?);
    let d_exit = time_to_minutes(parse_time_strict(&cfg.default_exit)?);
    let s_entry = time_to_minutes(parse_time_strict(&sched.entry)?);
    let s_exit = time_to_minutes(parse_time_strict(&sched.exit)?);

    let mut ex_entry = time_to_minutes(parse_time_strict(&exception.entry)?);
    let mut ex_exit = time_to_minutes(parse_time_strict(&exception.exit)?);

    if s_exit != d_exit && ex_exit >= s_exit {
        ex_entry = s_entry;
        ex_exit = s_exit;
    }

    if s_entry != d_entry && !(ex_entry >= s_entry && ex_exit <= s_exit) {
        let default_duration = d_exit - d_entry;
        let sched_duration = s_exit - s_entry;
        let ex_duration = ex_exit - ex_entry;

        if default_duration > 0 {
            let scaled = ex_duration as f64 * sched_duration as f64 / default_duration as f64;
            ex_entry = s_entry;
            ex_exit = round_to_half_hour(s_entry + scaled as i64).min(s_exit);
        }
    }

    Ok(Exception {
        person: exception.person.clone(),
        entry: minutes_to_hhmm(ex_entry),
        exit: minutes_to_hhmm(ex_exit),
    })
}
