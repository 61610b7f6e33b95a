//! Validated identifier types: badge person ids and civil-calendar dates.
//!
//! Dates in the punch source are 8-digit `YYYYMMDD` strings on a fixed civil
//! calendar where months 1-6 have 31 days and months 7-12 have 30. They are
//! not convertible to chrono dates; `CivilDate` keeps them typed and ordered.

use crate::errors::{AppError, AppResult};
use serde::Serialize;
use std::fmt;

/// 8-digit numeric badge id, e.g. `00000010`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct PersonId(String);

impl PersonId {
    pub fn parse(s: &str) -> AppResult<Self> {
        if s.len() == 8 && s.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(s.to_string()))
        } else {
            Err(AppError::InvalidPersonId(s.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Days in a civil-calendar month: 31 for months 1-6, 30 for months 7-12.
pub fn days_in_civil_month(month: u8) -> u8 {
    if month <= 6 { 31 } else { 30 }
}

/// Calendar day as stored in punch files and the database: `YYYYMMDD`.
/// Lexicographic order of the raw string equals chronological order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct CivilDate(String);

impl CivilDate {
    pub fn parse(s: &str) -> AppResult<Self> {
        if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AppError::InvalidDate(s.to_string()));
        }

        let month: u8 = s[4..6].parse().unwrap_or(0);
        let day: u8 = s[6..8].parse().unwrap_or(0);

        if month == 0 || month > 12 {
            return Err(AppError::InvalidDate(s.to_string()));
        }
        if day == 0 || day > days_in_civil_month(month) {
            return Err(AppError::InvalidDate(s.to_string()));
        }

        Ok(Self(s.to_string()))
    }

    /// Build a date from components; panics are avoided by validating through
    /// the string form.
    pub fn from_parts(year: u16, month: u8, day: u8) -> AppResult<Self> {
        Self::parse(&format!("{:04}{:02}{:02}", year, month, day))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn year(&self) -> u16 {
        self.0[..4].parse().unwrap_or(0)
    }

    pub fn month(&self) -> u8 {
        self.0[4..6].parse().unwrap_or(0)
    }

    pub fn day(&self) -> u8 {
        self.0[6..8].parse().unwrap_or(0)
    }

    /// `YYYYMM` prefix used for month-scoped queries.
    pub fn month_key(&self) -> &str {
        &self.0[..6]
    }
}

impl fmt::Display for CivilDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn person_id_requires_eight_digits() {
        assert!(PersonId::parse("00000010").is_ok());
        assert!(PersonId::parse("0000001").is_err());
        assert!(PersonId::parse("0000001x").is_err());
        assert!(PersonId::parse("000000100").is_err());
    }

    #[test]
    fn civil_date_validates_month_lengths() {
        assert!(CivilDate::parse("14040631").is_ok()); // month 6 has 31 days
        assert!(CivilDate::parse("14040730").is_ok()); // month 7 has 30 days
        assert!(CivilDate::parse("14040731").is_err());
        assert!(CivilDate::parse("14041301").is_err());
        assert!(CivilDate::parse("14040600").is_err());
        assert!(CivilDate::parse("1404063").is_err());
    }

    #[test]
    fn civil_date_parts_and_month_key() {
        let d = CivilDate::parse("14040603").unwrap();
        assert_eq!(d.year(), 1404);
        assert_eq!(d.month(), 6);
        assert_eq!(d.day(), 3);
        assert_eq!(d.month_key(), "140406");
    }
}
