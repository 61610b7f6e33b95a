use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::{
    ensure_month_schedules, get_schedule, load_month_schedules, loaded_month_key, upsert_schedule,
};
use crate::errors::{AppError, AppResult};
use crate::models::ids::CivilDate;
use crate::models::schedule::WorkSchedule;
use crate::ui::messages::{info, success};
use crate::utils::date::{month_dates, parse_month_key};
use crate::utils::time::parse_time_strict;

fn print_row(s: &WorkSchedule) {
    let flags = match (s.is_holiday, s.late_allowed) {
        (true, true) => " | Holiday | Late allowed",
        (true, false) => " | Holiday",
        (false, true) => " | Late allowed",
        (false, false) => "",
    };
    println!(
        "{} | {} - {} | floating {:.1}h{}",
        s.date, s.entry, s.exit, s.floating_hours, flags
    );
}

/// Handle the `schedule` command: backfill default rows for a month, edit a
/// single day, or print the stored rows.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Schedule {
        fill,
        month,
        date,
        entry,
        exit,
        floating,
        late_allowed,
        holiday,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;

        if *fill {
            let key = match month {
                Some(m) => m.clone(),
                None => loaded_month_key(&pool.conn)?.ok_or_else(|| {
                    AppError::Other(
                        "no month loaded; import punches first or pass --month".to_string(),
                    )
                })?,
            };
            let (year, mon) = parse_month_key(&key)?;
            let defaults = month_dates(year, mon)?
                .into_iter()
                .map(|d| WorkSchedule::default_for(d, cfg));
            let inserted = ensure_month_schedules(&pool.conn, defaults)?;
            success(format!("Month {key}: {inserted} default day(s) added."));
            return Ok(());
        }

        if let Some(date_str) = date {
            let day = CivilDate::parse(date_str)?;
            let has_edit = entry.is_some()
                || exit.is_some()
                || floating.is_some()
                || late_allowed.is_some()
                || holiday.is_some();

            if !has_edit {
                match get_schedule(&pool.conn, &day)? {
                    Some(row) => print_row(&row),
                    None => info(format!("No schedule row for {day}; defaults apply.")),
                }
                return Ok(());
            }

            let mut row = match get_schedule(&pool.conn, &day)? {
                Some(row) => row,
                None => WorkSchedule::default_for(day.clone(), cfg),
            };
            if let Some(e) = entry {
                parse_time_strict(e)?;
                row.entry = e.clone();
            }
            if let Some(x) = exit {
                parse_time_strict(x)?;
                row.exit = x.clone();
            }
            if let Some(f) = floating {
                row.floating_hours = *f;
            }
            if let Some(l) = late_allowed {
                row.late_allowed = *l;
            }
            if let Some(h) = holiday {
                row.is_holiday = *h;
            }
            upsert_schedule(&pool.conn, &row)?;
            success(format!("Schedule for {day} updated."));
            return Ok(());
        }

        // no flags: print the loaded month
        match loaded_month_key(&pool.conn)? {
            Some(key) => {
                let rows = load_month_schedules(&pool.conn, &key)?;
                if rows.is_empty() {
                    info(format!(
                        "No schedule rows for month {key}; run `schedule --fill`."
                    ));
                } else {
                    for row in &rows {
                        print_row(row);
                    }
                }
            }
            None => info("No month loaded; import punches first."),
        }
    }
    Ok(())
}
