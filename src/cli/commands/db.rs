use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::db_utils;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{error, info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        check,
        vacuum,
        info: show_info,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;

        if *check {
            let result = db_utils::integrity_check(&pool)?;
            if result == "ok" {
                success("Database integrity: ok");
            } else {
                error(format!("Database integrity check failed: {result}"));
            }
        }

        if *vacuum {
            db_utils::vacuum(&pool)?;
            success("Database vacuumed.");
        }

        if *show_info {
            let stats = db_utils::info(&pool)?;
            println!("Database: {}", cfg.database);
            println!("  sessions:       {}", stats.sessions);
            println!("  work_schedules: {}", stats.schedules);
            println!("  exceptions:     {}", stats.exceptions);
        }

        if !*check && !*vacuum && !*show_info {
            info("Nothing to do: pass --check, --vacuum or --info.");
        }
    }
    Ok(())
}
