use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::ReportLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::event::ReasonTotals;
use crate::models::ids::PersonId;
use crate::utils::time::format_minutes;

/// Handle the `report` command: print the indexed event list that `classify`
/// consumes, plus the per-reason minute totals so far.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report { id } = cmd {
        let person = PersonId::parse(id)?;
        let pool = DbPool::new(&cfg.database)?;

        let events = ReportLogic::build(&pool.conn, cfg, &person)?;
        if events.is_empty() {
            println!("No late/early/leave events for id {person}.");
            return Ok(());
        }

        println!("Report for id {person}:");
        for (idx, ev) in events.iter().enumerate() {
            let reason = match ev.reason {
                Some(r) => r.label(),
                None => "unclassified",
            };
            println!(
                "[{idx}] {} | {} | {} - {} | {} min | {}",
                ev.date,
                ev.kind.label(),
                ev.entry,
                ev.exit,
                ev.minutes,
                reason,
            );
        }

        let classified: Vec<_> = events.iter().filter(|e| e.reason.is_some()).cloned().collect();
        let totals = ReasonTotals::from_events(&classified);
        let missing = events.len() - classified.len();
        println!(
            "Totals (classified): impermissible {} | announced {} | other {}",
            format_minutes(totals.impermissible),
            format_minutes(totals.announced),
            format_minutes(totals.other),
        );
        if missing > 0 {
            println!("{missing} event(s) still unclassified.");
        }
    }
    Ok(())
}
