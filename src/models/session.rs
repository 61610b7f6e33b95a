use super::event::Reason;
use super::ids::{CivilDate, PersonId};
use serde::Serialize;

/// How a session was reconstructed.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum SessionStatus {
    /// Built from an even punch group.
    Paired,
    /// Built from an odd punch group using only the first/last punch;
    /// needs manual correction via `edit`.
    Fallback,
    /// Backfilled absence row derived from the schedule, not from punches.
    Synthetic,
}

impl SessionStatus {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            SessionStatus::Paired => "paired",
            SessionStatus::Fallback => "fallback",
            SessionStatus::Synthetic => "synthetic",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "paired" => Some(SessionStatus::Paired),
            "fallback" => Some(SessionStatus::Fallback),
            "synthetic" => Some(SessionStatus::Synthetic),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SessionStatus::Paired => "Paired",
            SessionStatus::Fallback => "Fallback",
            SessionStatus::Synthetic => "Synthetic",
        }
    }
}

/// What the session represents.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum SessionKind {
    /// An entry/exit work span.
    Normal,
    /// An intra-day gap between paired punches, or a backfilled absence.
    Leave,
}

impl SessionKind {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            SessionKind::Normal => "normal",
            SessionKind::Leave => "leave",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "normal" => Some(SessionKind::Normal),
            "leave" => Some(SessionKind::Leave),
            _ => None,
        }
    }
}

/// A reconstructed work period (or gap) for one person on one day.
///
/// Sessions are a cache over punches + schedule state, but once persisted the
/// store treats them as authoritative: edits (fallback correction, reason
/// assignment) are written back.
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub session_id: i64,
    pub person: PersonId,
    pub date: CivilDate,
    pub entry: String, // "HH:MM"; may become unparsable through manual edits
    pub exit: String,
    pub status: SessionStatus,
    pub kind: SessionKind,
    pub duration_minutes: i64,
    pub reason: Option<Reason>,
}

impl Session {
    pub fn new(
        person: PersonId,
        date: CivilDate,
        entry: String,
        exit: String,
        status: SessionStatus,
        kind: SessionKind,
        duration_minutes: i64,
    ) -> Self {
        Self {
            session_id: 0,
            person,
            date,
            entry,
            exit,
            status,
            kind,
            duration_minutes,
            reason: None,
        }
    }
}
