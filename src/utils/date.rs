//! Civil-calendar date helpers: month enumeration and month keys.

use crate::errors::{AppError, AppResult};
use crate::models::ids::{CivilDate, days_in_civil_month};

/// Split a `YYYYMM` month key into (year, month).
pub fn parse_month_key(key: &str) -> AppResult<(u16, u8)> {
    if key.len() != 6 || !key.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::InvalidDate(key.to_string()));
    }
    let year: u16 = key[..4].parse().unwrap_or(0);
    let month: u8 = key[4..6].parse().unwrap_or(0);
    if month == 0 || month > 12 {
        return Err(AppError::InvalidDate(key.to_string()));
    }
    Ok((year, month))
}

/// All dates of a civil month, in order.
pub fn month_dates(year: u16, month: u8) -> AppResult<Vec<CivilDate>> {
    (1..=days_in_civil_month(month))
        .map(|day| CivilDate::from_parts(year, month, day))
        .collect()
}
