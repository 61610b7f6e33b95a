//! Session builder: reconstruct entry/exit spans from grouped punch times.
//!
//! Per (person, day) group, times sort lexicographically (zero-padded HH:MM
//! strings order like times). An even group yields one Paired session over
//! the min/max punch plus a Leave session for every interior gap; an odd
//! group yields a single Fallback session needing manual correction.
//! Rebuilding from the same punches always yields the same session set.

use crate::models::punch::PunchGroups;
use crate::models::session::{Session, SessionKind, SessionStatus};
use crate::utils::time::gap_minutes;

pub fn build_sessions(groups: &PunchGroups) -> Vec<Session> {
    let mut sessions = Vec::new();

    for ((person, date), times) in groups {
        if times.is_empty() {
            continue;
        }

        let mut sorted = times.clone();
        sorted.sort();

        let first = sorted.first().cloned().unwrap_or_default();
        let last = sorted.last().cloned().unwrap_or_default();
        let span = gap_minutes(&first, &last);

        if sorted.len() % 2 != 0 {
            sessions.push(Session::new(
                person.clone(),
                date.clone(),
                first,
                last,
                SessionStatus::Fallback,
                SessionKind::Normal,
                span,
            ));
            continue;
        }

        sessions.push(Session::new(
            person.clone(),
            date.clone(),
            first,
            last,
            SessionStatus::Paired,
            SessionKind::Normal,
            span,
        ));

        // Interior gaps: the 2nd/3rd, 4th/5th, ... punches bracket time
        // spent outside between two work spans.
        let mut i = 1;
        while i + 1 < sorted.len() {
            let out = sorted[i].clone();
            let back = sorted[i + 1].clone();
            let gap = gap_minutes(&out, &back);
            sessions.push(Session::new(
                person.clone(),
                date.clone(),
                out,
                back,
                SessionStatus::Paired,
                SessionKind::Leave,
                gap,
            ));
            i += 2;
        }
    }

    sessions
}
