//! Punch ingestor: strict line-level validation of the raw badge log.
//!
//! Every line must be exactly four whitespace-separated tokens:
//! `<8-digit id> <8-digit date> <HH:MM> <code>`. Validation fails the whole
//! batch on the first violation; no partial state is ever committed.

use crate::errors::{AppError, AppResult};
use crate::models::ids::{CivilDate, PersonId};
use crate::models::punch::PunchRecord;
use regex::Regex;
use std::sync::LazyLock;

static DIGITS8_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{8}$").unwrap());
static TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([01][0-9]|2[0-3]):[0-5][0-9]$").unwrap());

fn bad_line(line: usize, reason: impl Into<String>) -> AppError {
    AppError::Validation {
        line,
        reason: reason.into(),
    }
}

/// Parse the whole punch file. Aborts with a line-numbered error on the
/// first malformed line; an input with no valid records is `EmptyInput`.
pub fn parse_punch_file(input: &str) -> AppResult<Vec<PunchRecord>> {
    let mut records = Vec::new();

    for (i, raw) in input.lines().enumerate() {
        let line = i + 1;
        let tokens: Vec<&str> = raw.split_whitespace().collect();

        if tokens.len() != 4 {
            return Err(bad_line(
                line,
                format!("expected 4 fields, found {}", tokens.len()),
            ));
        }

        let (id_tok, date_tok, time_tok, code_tok) = (tokens[0], tokens[1], tokens[2], tokens[3]);

        if !DIGITS8_RE.is_match(id_tok) {
            return Err(bad_line(line, format!("person id must be 8 digits: {id_tok}")));
        }
        let person = PersonId::parse(id_tok)
            .map_err(|_| bad_line(line, format!("invalid person id: {id_tok}")))?;

        if !DIGITS8_RE.is_match(date_tok) {
            return Err(bad_line(line, format!("date must be 8 digits: {date_tok}")));
        }
        let date = CivilDate::parse(date_tok)
            .map_err(|_| bad_line(line, format!("invalid calendar date: {date_tok}")))?;

        if !TIME_RE.is_match(time_tok) {
            return Err(bad_line(line, format!("time must be HH:MM: {time_tok}")));
        }

        records.push(PunchRecord {
            person,
            date,
            time: time_tok.to_string(),
            code: code_tok.to_string(),
        });
    }

    if records.is_empty() {
        return Err(AppError::EmptyInput);
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_lines() {
        let recs = parse_punch_file("00000010 14040603 16:38 05\n00000010 14040603 07:31 05\n")
            .unwrap();
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].person.as_str(), "00000010");
        assert_eq!(recs[0].date.as_str(), "14040603");
        assert_eq!(recs[0].time, "16:38");
        assert_eq!(recs[0].code, "05");
    }

    #[test]
    fn rejects_wrong_field_count_with_line_number() {
        let err = parse_punch_file("00000010 14040603 16:38 05\n00000010 14040603 16:38\n")
            .unwrap_err();
        match err {
            AppError::Validation { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_bad_id_date_and_time() {
        assert!(parse_punch_file("0000001 14040603 16:38 05").is_err());
        assert!(parse_punch_file("0000001x 14040603 16:38 05").is_err());
        assert!(parse_punch_file("00000010 14040732 16:38 05").is_err()); // month 7 has 30 days
        assert!(parse_punch_file("00000010 14040603 25:00 05").is_err());
        assert!(parse_punch_file("00000010 14040603 16:61 05").is_err());
    }

    #[test]
    fn empty_input_is_its_own_error() {
        assert!(matches!(parse_punch_file(""), Err(AppError::EmptyInput)));
    }
}
