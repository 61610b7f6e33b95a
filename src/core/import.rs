//! Month-scoped punch import: ingest, build sessions, persist.
//!
//! Import is idempotent per month: if the store already holds sessions for
//! the file's month, ingestion is skipped entirely and the existing data is
//! kept — re-importing the same file twice never duplicates sessions.

use crate::config::Config;
use crate::core::{ingest, sessions};
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::punch::group_punches;
use crate::models::schedule::WorkSchedule;
use crate::ui::messages::{success, warning};
use crate::utils::date::{month_dates, parse_month_key};
use std::fs;

pub struct ImportLogic;

impl ImportLogic {
    pub fn import(pool: &mut DbPool, cfg: &Config, file: &str) -> AppResult<()> {
        let contents = fs::read_to_string(file)?;
        let records = ingest::parse_punch_file(&contents)?;

        let month_key = records[0].date.month_key().to_string();
        if let Some(rec) = records.iter().find(|r| r.date.month_key() != month_key) {
            return Err(AppError::Other(format!(
                "punch file spans multiple months ({} and {}); import one month at a time",
                month_key,
                rec.date.month_key()
            )));
        }

        if queries::month_has_sessions(&pool.conn, &month_key)? {
            let existing = queries::count_month_sessions(&pool.conn, &month_key)?;
            warning(format!(
                "Month {month_key} already imported — skipping ingestion, {existing} session(s) kept."
            ));
            return Ok(());
        }

        let groups = group_punches(records);
        let built = sessions::build_sessions(&groups);

        let (year, month) = parse_month_key(&month_key)?;
        let defaults = month_dates(year, month)?
            .into_iter()
            .map(|d| WorkSchedule::default_for(d, cfg));

        let tx = pool.conn.transaction()?;

        let backfilled = queries::ensure_month_schedules(&tx, defaults)?;

        let mut inserted = 0;
        for s in &built {
            if queries::session_exists(&tx, &s.person, &s.date, &s.entry, &s.exit)? {
                continue;
            }
            queries::insert_session(&tx, s)?;
            inserted += 1;
        }

        tx.commit()?;

        success(format!(
            "Imported month {month_key}: {inserted} session(s), {backfilled} schedule day(s) initialized."
        ));
        Ok(())
    }
}
