//! Time utilities: parsing HH:MM, minute arithmetic, formatting.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

pub fn parse_time_strict(t: &str) -> AppResult<NaiveTime> {
    parse_time(t).ok_or_else(|| AppError::InvalidTime(t.to_string()))
}

/// Minutes since midnight. All late/early arithmetic runs on this scale so
/// windows extended past the scheduled exit never wrap.
pub fn time_to_minutes(t: NaiveTime) -> i64 {
    t.hour() as i64 * 60 + t.minute() as i64
}

/// Signed minute difference `end - start`, truncated (times carry no seconds).
pub fn minutes_between(start: NaiveTime, end: NaiveTime) -> i64 {
    (end - start).num_minutes()
}

/// Minute gap between two "HH:MM" strings; 0 when either fails to parse.
pub fn gap_minutes(start: &str, end: &str) -> i64 {
    match (parse_time(start), parse_time(end)) {
        (Some(s), Some(e)) => minutes_between(s, e).max(0),
        _ => 0,
    }
}

/// Render minutes-since-midnight back to "HH:MM" (clamped into one day).
pub fn minutes_to_hhmm(mins: i64) -> String {
    let m = mins.clamp(0, 23 * 60 + 59);
    format!("{:02}:{:02}", m / 60, m % 60)
}

pub fn format_minutes(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}

/// Round minutes-since-midnight to the nearest half hour:
/// :00-:14 down to :00, :15-:44 to :30, :45-:59 up to the next hour.
pub fn round_to_half_hour(mins: i64) -> i64 {
    let hour = mins.div_euclid(60);
    let m = mins.rem_euclid(60);
    if m < 15 {
        hour * 60
    } else if m < 45 {
        hour * 60 + 30
    } else {
        (hour + 1) * 60
    }
}
