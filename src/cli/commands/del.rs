use crate::cli::commands::print_ledger;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::storage::{RecordRepository, SqliteStore};
use crate::ui::messages::success;

/// Delete by row number. No confirmation, no undo.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { row } = cmd {
        let pool = DbPool::open(&cfg.database)?;
        let mut repo = RecordRepository::new(SqliteStore::new(&pool.conn), &cfg.storage_key);

        let removed = DeleteLogic::apply(&mut repo, *row)?;
        ttlog_or_warn(
            &pool.conn,
            "del",
            removed.name(),
            &format!("Deleted row {}", row),
        );

        success(format!("Row {} ({}) has been deleted.", row, removed.name()));
        print_ledger(&repo.load()?, cfg);
    }

    Ok(())
}
