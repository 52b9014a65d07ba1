use super::KeyValueStore;
use crate::errors::AppResult;
use crate::utils::time::now_stamp;
use rusqlite::{Connection, OptionalExtension, params};

/// Store backed by the `kv_store` table.
pub struct SqliteStore<'a> {
    conn: &'a Connection,
}

impl<'a> SqliteStore<'a> {
    /// `conn` must already carry the schema (see `db::initialize::init_db`).
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

impl KeyValueStore for SqliteStore<'_> {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let value: Option<String> = self
            .conn
            .query_row("SELECT value FROM kv_store WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.conn.execute(
            "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, now_stamp()],
        )?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        self.conn
            .execute("DELETE FROM kv_store WHERE key = ?1", [key])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::pool::DbPool;

    #[test]
    fn values_survive_reopening_the_store() {
        let pool = DbPool::in_memory().unwrap();
        {
            let mut store = SqliteStore::new(&pool.conn);
            store.set("employeeHours", "[]").unwrap();
            store.set("employeeHours", "[1]").unwrap();
        }
        let store = SqliteStore::new(&pool.conn);
        assert_eq!(store.get("employeeHours").unwrap().as_deref(), Some("[1]"));

        let rows: i64 = pool
            .conn
            .query_row("SELECT COUNT(*) FROM kv_store", [], |r| r.get(0))
            .unwrap();
        assert_eq!(rows, 1);
    }

    #[test]
    fn missing_key_is_none() {
        let pool = DbPool::in_memory().unwrap();
        let mut store = SqliteStore::new(&pool.conn);
        assert_eq!(store.get("nope").unwrap(), None);
        store.remove("nope").unwrap();
    }
}
