use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::load_sessions_for_person;
use crate::errors::AppResult;
use crate::models::ids::PersonId;
use crate::models::session::SessionKind;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { id } = cmd {
        let person = PersonId::parse(id)?;
        let pool = DbPool::new(&cfg.database)?;

        let sessions = load_sessions_for_person(&pool.conn, &person)?;
        if sessions.is_empty() {
            println!("No sessions for id {person}");
            return Ok(());
        }

        println!("Sessions for id {person}:");
        for s in &sessions {
            let kind = match s.kind {
                SessionKind::Normal => "",
                SessionKind::Leave => " | Leave",
            };
            println!(
                "[{}] Date: {} | Entry: {} | Exit: {} | {} min | {}{}{}",
                s.session_id,
                s.date,
                s.entry,
                s.exit,
                s.duration_minutes,
                s.status.label(),
                kind,
                s.reason
                    .map(|r| format!(" | Reason: {}", r.label()))
                    .unwrap_or_default(),
            );
        }
    }
    Ok(())
}
