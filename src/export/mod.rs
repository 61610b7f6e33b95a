mod fs_utils;
mod writer;

pub use fs_utils::ensure_writable;

use crate::config::Config;
use crate::core::report::ReportLogic;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::event::{LateEarlyEvent, ReasonTotals};
use crate::models::ids::PersonId;
use crate::ui::messages::warning;
use std::io;
use std::path::Path;

/// One export row: an event annotated with its person's running totals
/// (repeated on every row, per the report contract).
pub struct ReportRow {
    pub person: String,
    pub date: String,
    pub entry: String,
    pub exit: String,
    pub status: String,
    pub minutes: i64,
    pub mode: String,
    pub reason: String,
    pub totals: ReasonTotals,
}

impl ReportRow {
    fn from_event(ev: &LateEarlyEvent, totals: ReasonTotals) -> Self {
        Self {
            person: ev.person.to_string(),
            date: ev.date.to_string(),
            entry: ev.entry.clone(),
            exit: ev.exit.clone(),
            status: ev.kind.label().to_string(),
            minutes: ev.minutes,
            mode: ev.session_status.label().to_string(),
            reason: ev
                .reason
                .map(|r| r.label().to_string())
                .unwrap_or_default(),
            totals,
        }
    }
}

pub struct ExportLogic;

impl ExportLogic {
    /// Export the classified report to CSV, either for one person or for
    /// everyone in the store. Refuses to run while any event of the selected
    /// scope is still unclassified.
    pub fn export(
        pool: &mut DbPool,
        cfg: &Config,
        file: &str,
        person: Option<&PersonId>,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);
        if !path.is_absolute() {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }
        ensure_writable(path, force)?;

        let persons = match person {
            Some(p) => vec![p.clone()],
            None => queries::distinct_persons(&pool.conn)?,
        };

        let mut rows = Vec::new();
        for p in &persons {
            let (events, totals) = ReportLogic::classified_events(&pool.conn, cfg, p)?;
            rows.extend(events.iter().map(|ev| ReportRow::from_event(ev, totals)));
        }

        if rows.is_empty() {
            warning("No events found to export.");
            return Ok(0);
        }

        rows.sort_by(|a, b| {
            (&a.person, &a.date, &a.entry, &a.exit).cmp(&(&b.person, &b.date, &b.entry, &b.exit))
        });

        writer::write_report(path, &rows)?;
        Ok(rows.len())
    }
}
