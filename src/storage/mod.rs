//! Local key/value persistence for the record list.
//!
//! The whole list lives under a single key as a JSON array and is rewritten
//! wholesale on every change.

pub mod memory;
pub mod repository;
pub mod sqlite;

pub use memory::MemoryStore;
pub use repository::RecordRepository;
pub use sqlite::SqliteStore;

use crate::errors::AppResult;

/// Default key under which the record list is stored.
pub const DEFAULT_STORAGE_KEY: &str = "employeeHours";

/// String-keyed, string-valued store.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;
    fn remove(&mut self, key: &str) -> AppResult<()>;
}
