pub mod add;
pub mod auth;
pub mod backup;
pub mod calculator;
pub mod del;
pub mod ledger;
pub mod log;
