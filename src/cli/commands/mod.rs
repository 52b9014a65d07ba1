pub mod add;
pub mod auth;
pub mod backup;
pub mod clear;
pub mod config;
pub mod db;
pub mod del;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod login;

use crate::config::Config;
use crate::core::ledger::HourLedger;
use crate::ui::table;

/// Table plus total, as shown after every change.
pub(crate) fn print_ledger(ledger: &HourLedger, cfg: &Config) {
    if ledger.is_empty() {
        println!("No employee hours recorded yet.");
    }
    println!("{}", table::render(ledger, &cfg.currency_symbol));
}
