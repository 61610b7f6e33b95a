//! Late/early evaluator: classify a session against its resolved schedule.
//!
//! The floating window tolerates late arrival up to `entry + float` (plus a
//! configurable grace when the day is flagged late-allowed). Arriving within
//! the window shifts the required exit by the same offset — early arrivals
//! earn an equally early exit, late-but-tolerated arrivals owe the time at
//! the end of the day. Once the arrival is outright late, the floating
//! credit is gone and the required exit collapses to `exit + float`.

use crate::models::event::{EventKind, LateEarlyEvent};
use crate::models::schedule::ResolvedSchedule;
use crate::models::session::{Session, SessionKind};
use crate::utils::time::{parse_time, time_to_minutes};

/// Evaluate one session. Emits zero, one or two events for a Normal session
/// (late entry and early exit can both occur); Leave sessions pass through
/// as-is with their gap duration. Sessions on holidays, and sessions whose
/// times no longer parse (possible after manual fallback edits), emit
/// nothing — never an error.
pub fn evaluate_session(
    session: &Session,
    sched: &ResolvedSchedule,
    late_grace_minutes: i64,
) -> Vec<LateEarlyEvent> {
    if sched.is_holiday {
        return Vec::new();
    }

    if session.kind == SessionKind::Leave {
        return vec![LateEarlyEvent {
            person: session.person.clone(),
            date: session.date.clone(),
            entry: session.entry.clone(),
            exit: session.exit.clone(),
            session_status: session.status,
            kind: EventKind::Leave,
            minutes: session.duration_minutes,
            reason: session.reason,
            source_session: session.session_id,
        }];
    }

    let (Some(actual_entry), Some(actual_exit)) =
        (parse_time(&session.entry), parse_time(&session.exit))
    else {
        return Vec::new();
    };

    let actual_entry = time_to_minutes(actual_entry);
    let actual_exit = time_to_minutes(actual_exit);
    let sched_entry = time_to_minutes(sched.entry);
    let sched_exit = time_to_minutes(sched.exit);

    let grace = if sched.late_allowed {
        late_grace_minutes
    } else {
        0
    };
    let latest_allowed_entry = sched_entry + sched.float_minutes + grace;

    let mut events = Vec::new();

    let allowed_exit = if actual_entry > latest_allowed_entry {
        events.push(LateEarlyEvent {
            person: session.person.clone(),
            date: session.date.clone(),
            entry: session.entry.clone(),
            exit: session.exit.clone(),
            session_status: session.status,
            kind: EventKind::LateEntry,
            minutes: actual_entry - latest_allowed_entry,
            reason: None,
            source_session: session.session_id,
        });
        // no floating credit once the entry is already late
        sched_exit + sched.float_minutes
    } else {
        sched_exit + (actual_entry - sched_entry)
    };

    if actual_exit < allowed_exit {
        events.push(LateEarlyEvent {
            person: session.person.clone(),
            date: session.date.clone(),
            entry: session.entry.clone(),
            exit: session.exit.clone(),
            session_status: session.status,
            kind: EventKind::EarlyExit,
            minutes: allowed_exit - actual_exit,
            reason: None,
            source_session: session.session_id,
        });
    }

    events
}
