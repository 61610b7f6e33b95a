use super::ids::{CivilDate, PersonId};
use super::session::SessionStatus;
use serde::Serialize;

/// Reason code assigned by a human to each flagged event.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum Reason {
    Impermissible,
    Announced,
    Other,
}

impl Reason {
    /// Parse a user- or db-supplied label. Unknown labels fold into `Other`.
    pub fn from_label(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "impermissible" => Reason::Impermissible,
            "announced" => Reason::Announced,
            _ => Reason::Other,
        }
    }

    pub fn to_db_str(&self) -> &'static str {
        match self {
            Reason::Impermissible => "impermissible",
            Reason::Announced => "announced",
            Reason::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Reason::Impermissible => "Impermissible",
            Reason::Announced => "Announced",
            Reason::Other => "Other",
        }
    }
}

/// Classification of a flagged event.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum EventKind {
    LateEntry,
    EarlyExit,
    Leave,
}

impl EventKind {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            EventKind::LateEntry => "late_entry",
            EventKind::EarlyExit => "early_exit",
            EventKind::Leave => "leave",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "late_entry" => Some(EventKind::LateEntry),
            "early_exit" => Some(EventKind::EarlyExit),
            "leave" => Some(EventKind::Leave),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EventKind::LateEntry => "Late Entry",
            EventKind::EarlyExit => "Early Exit",
            EventKind::Leave => "Leave",
        }
    }
}

/// A late arrival, early departure or leave period derived from one session.
/// Events are recomputed from sessions + schedules; they are only persisted
/// once a reason has been attached.
#[derive(Debug, Clone, Serialize)]
pub struct LateEarlyEvent {
    pub person: PersonId,
    pub date: CivilDate,
    pub entry: String,
    pub exit: String,
    pub session_status: SessionStatus,
    pub kind: EventKind,
    pub minutes: i64,
    pub reason: Option<Reason>,
    /// Row id of the session this event was derived from.
    pub source_session: i64,
}

/// Per-person minute totals grouped by reason.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReasonTotals {
    pub impermissible: i64,
    pub announced: i64,
    pub other: i64,
}

impl ReasonTotals {
    pub fn from_events(events: &[LateEarlyEvent]) -> Self {
        let mut totals = Self::default();
        for ev in events {
            match ev.reason {
                Some(Reason::Impermissible) => totals.impermissible += ev.minutes,
                Some(Reason::Announced) => totals.announced += ev.minutes,
                // unclassified events never reach totals; callers refuse them
                Some(Reason::Other) => totals.other += ev.minutes,
                None => {}
            }
        }
        totals
    }
}
