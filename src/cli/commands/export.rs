use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::storage::{RecordRepository, SqliteStore};
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let pool = DbPool::open(&cfg.database)?;
        let repo = RecordRepository::new(SqliteStore::new(&pool.conn), &cfg.storage_key);
        let ledger = repo.load()?;

        let path = expand_tilde(file);
        let n = ExportLogic::export(&ledger, *format, &path, *force)?;

        if n > 0 {
            ttlog_or_warn(
                &pool.conn,
                "export",
                &path.to_string_lossy(),
                &format!("Exported {} record(s) as {}", n, format.as_str()),
            );
        }
    }
    Ok(())
}
