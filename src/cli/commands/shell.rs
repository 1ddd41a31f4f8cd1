use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Start the interactive tracking shell.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut pool = DbPool::new(&cfg.database)?;

    // The shell may be the first thing ever run against this database.
    init_db(&pool.conn)?;

    crate::shell::run(&mut pool, cfg)
}
