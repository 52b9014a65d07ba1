use crate::cli::commands::print_ledger;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::forms::HourForm;
use crate::storage::{RecordRepository, SqliteStore};
use crate::ui::messages::success;
use crate::utils::formatting::{format_money, format_number};

/// Add employee hours.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        name,
        start_time,
        end_time,
        hourly_rate,
        days,
    } = cmd
    {
        let form = HourForm {
            name: name.clone(),
            start_time: start_time.clone(),
            end_time: end_time.clone(),
            hourly_rate: hourly_rate.clone(),
            days: days.clone(),
        };

        let pool = DbPool::open(&cfg.database)?;
        let mut repo = RecordRepository::new(SqliteStore::new(&pool.conn), &cfg.storage_key);

        let (record, ledger) = AddLogic::apply(&mut repo, &form)?;

        let summary = format!(
            "{} hours, {}",
            format_number(record.total_hours()),
            format_money(&cfg.currency_symbol, record.total_compensation())
        );
        ttlog_or_warn(&pool.conn, "add", record.name(), &summary);

        success(format!("Added {}: {}", record.name(), summary));
        print_ledger(&ledger, cfg);
    }

    Ok(())
}
