use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::errors::AppResult;
use rusqlite::Connection;

/// Handle the `init` command: config directory + file, then the SQLite
/// schema.
pub fn handle(cli: &Cli) -> AppResult<()> {
    if let Some(custom) = &cli.db {
        Config::init_all(Some(custom.clone()), cli.test)?;
    } else {
        Config::init_all(None, cli.test)?;
    }

    let mut cfg = Config::load();
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    let conn = Connection::open(&cfg.database)?;
    init_db(&conn)?;

    Ok(())
}
