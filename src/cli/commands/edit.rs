use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::{load_session, update_session_times};
use crate::errors::{AppError, AppResult};
use crate::models::session::SessionStatus;
use crate::ui::messages::success;
use crate::utils::time::{gap_minutes, parse_time_strict};

/// Correct the entry/exit of a fallback session (the odd-punch-count
/// degraded reconstruction). Paired sessions are punch-derived and stay
/// read-only.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        session,
        entry,
        exit,
    } = cmd
    {
        parse_time_strict(entry)?;
        parse_time_strict(exit)?;

        let pool = DbPool::new(&cfg.database)?;
        let current = load_session(&pool.conn, *session)?;

        if current.status != SessionStatus::Fallback {
            return Err(AppError::Other(format!(
                "session {} is {}; only fallback sessions can be edited",
                session,
                current.status.to_db_str()
            )));
        }

        let duration = gap_minutes(entry, exit);
        update_session_times(&pool.conn, *session, entry, exit, duration)?;

        success(format!(
            "Session {} updated: {} → {} ({} min).",
            session, entry, exit, duration
        ));
    }
    Ok(())
}
