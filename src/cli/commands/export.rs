use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::models::ids::PersonId;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export { file, id, force } = cmd {
        let person = match id {
            Some(raw) => Some(PersonId::parse(raw)?),
            None => None,
        };

        let mut pool = DbPool::new(&cfg.database)?;
        let rows = ExportLogic::export(&mut pool, cfg, file, person.as_ref(), *force)?;
        if rows > 0 {
            success(format!("Exported {rows} row(s) to {file}."));
        }
    }
    Ok(())
}
