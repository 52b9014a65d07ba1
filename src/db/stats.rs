use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use crate::utils::time::utc_stamp;
use rusqlite::OptionalExtension;
use std::fs;

/// Row counts and the state of the record key, for `db --info`.
#[derive(Debug, Default)]
pub struct DbStats {
    pub file_size: u64,
    pub stored_records: usize,
    pub records_updated_at: Option<String>,
    pub accounts: i64,
    pub active_sessions: i64,
    pub log_entries: i64,
}

pub fn collect(pool: &DbPool, db_path: &str, storage_key: &str) -> rusqlite::Result<DbStats> {
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);

    let stored: Option<(String, String)> = pool
        .conn
        .query_row(
            "SELECT value, updated_at FROM kv_store WHERE key = ?1",
            [storage_key],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .optional()?;

    // A corrupted value is reported as zero records here; `list` surfaces the error.
    let (stored_records, records_updated_at) = match stored {
        Some((value, updated_at)) => {
            let n = serde_json::from_str::<Vec<serde_json::Value>>(&value)
                .map(|v| v.len())
                .unwrap_or(0);
            (n, Some(updated_at))
        }
        None => (0, None),
    };

    let count = |sql: &str| pool.conn.query_row(sql, [], |row| row.get::<_, i64>(0));

    Ok(DbStats {
        file_size,
        stored_records,
        records_updated_at,
        accounts: count("SELECT COUNT(*) FROM accounts")?,
        active_sessions: pool.conn.query_row(
            "SELECT COUNT(*) FROM sessions WHERE expires_at > ?1",
            [utc_stamp(chrono::Utc::now())],
            |row| row.get(0),
        )?,
        log_entries: count("SELECT COUNT(*) FROM log")?,
    })
}

pub fn print_db_info(pool: &DbPool, db_path: &str, storage_key: &str) -> rusqlite::Result<()> {
    let stats = collect(pool, db_path, storage_key)?;
    let file_kb = (stats.file_size as f64) / 1024.0;

    println!();
    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);
    println!(
        "{}• Hour records ({}):{} {}{}{}",
        CYAN, storage_key, RESET, GREEN, stats.stored_records, RESET
    );
    println!(
        "{}• Last saved:{} {}",
        CYAN,
        RESET,
        stats
            .records_updated_at
            .unwrap_or_else(|| format!("{GREY}--{RESET}"))
    );
    println!("{}• Linked accounts:{} {}", CYAN, RESET, stats.accounts);
    println!("{}• Active sessions:{} {}", CYAN, RESET, stats.active_sessions);
    println!("{}• Log entries:{} {}", CYAN, RESET, stats.log_entries);
    println!();

    Ok(())
}
