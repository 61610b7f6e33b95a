use super::ids::{CivilDate, PersonId};
use crate::config::Config;
use chrono::NaiveTime;
use serde::Serialize;

/// Per-day schedule row; one per calendar day of a loaded month.
#[derive(Debug, Clone, Serialize)]
pub struct WorkSchedule {
    pub date: CivilDate,
    pub entry: String, // "HH:MM"
    pub exit: String,
    pub floating_hours: f64,
    pub late_allowed: bool,
    pub is_holiday: bool,
}

impl WorkSchedule {
    /// System-default row for a date (used when the store has no row yet).
    pub fn default_for(date: CivilDate, cfg: &Config) -> Self {
        Self {
            date,
            entry: cfg.default_entry.clone(),
            exit: cfg.default_exit.clone(),
            floating_hours: cfg.default_floating_hours,
            late_allowed: cfg.default_late_allowed,
            is_holiday: false,
        }
    }
}

/// Standing per-person override of the default entry/exit window
/// (e.g. part-time staff). Overrides entry/exit only; floating, late-allowed
/// and holiday still come from the date schedule.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Exception {
    pub person: PersonId,
    pub entry: String,
    pub exit: String,
}

/// The effective schedule for one (person, date) after merging the date row,
/// the person's exception and the system defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedSchedule {
    pub entry: NaiveTime,
    pub exit: NaiveTime,
    pub float_minutes: i64,
    pub late_allowed: bool,
    pub is_holiday: bool,
}
