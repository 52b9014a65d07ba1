//! Configuration file upgrades: detect keys added since the file was
//! written and fill them with their defaults.

use super::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::Value;
use std::fs;
use std::path::Path;

/// Keys every configuration file should carry.
pub const EXPECTED_KEYS: [&str; 4] = [
    "database",
    "storage_key",
    "currency_symbol",
    "session_ttl_hours",
];

/// Keys missing from the YAML `content`, in declaration order.
pub fn missing_keys(content: &str) -> AppResult<Vec<&'static str>> {
    let yaml: Value = serde_yaml::from_str(content)
        .map_err(|e| AppError::Config(format!("failed to parse configuration: {e}")))?;

    let Some(map) = yaml.as_mapping() else {
        return Ok(EXPECTED_KEYS.to_vec());
    };

    Ok(EXPECTED_KEYS
        .iter()
        .copied()
        .filter(|k| !map.contains_key(&Value::String(k.to_string())))
        .collect())
}

/// Rewrite the file at `path` with every missing key filled in.
///
/// Existing values are kept. Returns the keys that were added.
pub fn migrate_file(path: &Path) -> AppResult<Vec<&'static str>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path)?;
    let missing = missing_keys(&content)?;
    if missing.is_empty() {
        return Ok(missing);
    }

    // serde defaults fill whatever is absent
    let cfg = Config::from_yaml(&content)?;
    cfg.save_to(path)?;
    Ok(missing)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_missing_keys() {
        let missing = missing_keys("database: /tmp/a.sqlite\ncurrency_symbol: '€'\n").unwrap();
        assert_eq!(missing, vec!["storage_key", "session_ttl_hours"]);
    }

    #[test]
    fn complete_file_has_nothing_missing() {
        let yaml = Config::default().to_yaml().unwrap();
        assert!(missing_keys(&yaml).unwrap().is_empty());
    }

    #[test]
    fn migrate_fills_defaults_and_keeps_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pinard.conf");
        fs::write(&path, "database: /tmp/a.sqlite\ncurrency_symbol: '€'\n").unwrap();

        let added = migrate_file(&path).unwrap();
        assert_eq!(added, vec!["storage_key", "session_ttl_hours"]);

        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg.database, "/tmp/a.sqlite");
        assert_eq!(cfg.currency_symbol, "€");
        assert_eq!(cfg.storage_key, "employeeHours");

        assert!(migrate_file(&path).unwrap().is_empty());
    }
}
