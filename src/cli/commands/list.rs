use crate::cli::commands::print_ledger;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::storage::{RecordRepository, SqliteStore};
use crate::ui::messages::header;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List = cmd {
        let pool = DbPool::open(&cfg.database)?;
        let repo = RecordRepository::new(SqliteStore::new(&pool.conn), &cfg.storage_key);
        let ledger = repo.load()?;

        header("Employee Hours");
        print_ledger(&ledger, cfg);
    }
    Ok(())
}
