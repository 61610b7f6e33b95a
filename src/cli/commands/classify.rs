use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::ReportLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::event::Reason;
use crate::models::ids::PersonId;
use crate::ui::messages::success;
use crate::utils::time::format_minutes;

/// Parse one `N=REASON` pair from the command line.
fn parse_assignment(raw: &str) -> AppResult<(usize, Reason)> {
    let (idx_str, label) = raw
        .split_once('=')
        .ok_or_else(|| AppError::InvalidReason(raw.to_string()))?;

    let idx: usize = idx_str
        .trim()
        .parse()
        .map_err(|_| AppError::InvalidReason(raw.to_string()))?;

    let reason = match label.trim().to_lowercase().as_str() {
        "impermissible" => Reason::Impermissible,
        "announced" => Reason::Announced,
        "other" => Reason::Other,
        _ => return Err(AppError::InvalidReason(raw.to_string())),
    };

    Ok((idx, reason))
}

/// Handle the `classify` command: attach reasons to report events by index
/// and commit the fully classified report in one transaction.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Classify { id, reasons } = cmd {
        let person = PersonId::parse(id)?;

        let mut assignments = Vec::with_capacity(reasons.len());
        for raw in reasons {
            assignments.push(parse_assignment(raw)?);
        }

        let mut pool = DbPool::new(&cfg.database)?;
        let totals = ReportLogic::classify(&mut pool, cfg, &person, &assignments)?;

        success(format!(
            "Report for {person} committed. Totals: impermissible {} | announced {} | other {}",
            format_minutes(totals.impermissible),
            format_minutes(totals.announced),
            format_minutes(totals.other),
        ));
    }
    Ok(())
}
