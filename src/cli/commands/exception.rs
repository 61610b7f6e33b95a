use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::schedule::{reconcile_exception, schedule_or_default};
use crate::db::pool::DbPool;
use crate::db::queries::{delete_exception, get_exception, upsert_exception};
use crate::errors::{AppError, AppResult};
use crate::models::ids::{CivilDate, PersonId};
use crate::models::schedule::Exception;
use crate::ui::messages::{info, success, warning};
use crate::utils::time::parse_time_strict;

/// Handle the `exception` command: set, show, remove or reconcile a person's
/// standing entry/exit override.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Exception {
        id,
        entry,
        exit,
        remove,
        reconcile,
        date,
    } = cmd
    {
        let person = PersonId::parse(id)?;
        let pool = DbPool::new(&cfg.database)?;

        if *remove {
            if delete_exception(&pool.conn, &person)? {
                success(format!("Exception for {person} removed."));
            } else {
                warning(format!("No exception stored for {person}."));
            }
            return Ok(());
        }

        if *reconcile {
            // clap guarantees --date is present alongside --reconcile
            let day = CivilDate::parse(date.as_deref().unwrap_or_default())?;
            let exc = get_exception(&pool.conn, &person)?.ok_or_else(|| {
                AppError::Other(format!("no exception stored for {person}"))
            })?;
            let sched = schedule_or_default(&pool.conn, &day, cfg);
            let adjusted = reconcile_exception(&exc, &sched, cfg)?;

            if adjusted == exc {
                info(format!(
                    "Exception for {person} already fits the {day} schedule."
                ));
            } else {
                upsert_exception(&pool.conn, &adjusted)?;
                success(format!(
                    "Exception for {person} reconciled against {day}: {} - {}.",
                    adjusted.entry, adjusted.exit
                ));
            }
            return Ok(());
        }

        match (entry, exit) {
            (Some(e), Some(x)) => {
                parse_time_strict(e)?;
                parse_time_strict(x)?;
                let exc = Exception {
                    person: person.clone(),
                    entry: e.clone(),
                    exit: x.clone(),
                };
                upsert_exception(&pool.conn, &exc)?;
                success(format!("Exception for {person} set to {e} - {x}."));
            }
            (None, None) => match get_exception(&pool.conn, &person)? {
                Some(exc) => println!("Exception for {person}: {} - {}", exc.entry, exc.exit),
                None => info(format!("No exception stored for {person}.")),
            },
            _ => {
                return Err(AppError::Other(
                    "provide both --entry and --exit to set an exception".to_string(),
                ));
            }
        }
    }
    Ok(())
}
