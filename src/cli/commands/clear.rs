use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::storage::{RecordRepository, SqliteStore};
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear = cmd {
        let pool = DbPool::open(&cfg.database)?;
        let mut repo = RecordRepository::new(SqliteStore::new(&pool.conn), &cfg.storage_key);

        let n = DeleteLogic::clear(&mut repo)?;
        ttlog_or_warn(
            &pool.conn,
            "clear",
            &cfg.storage_key,
            &format!("Removed {} record(s)", n),
        );

        success(format!("Removed {} record(s).", n));
    }

    Ok(())
}
