#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, with its configuration directory kept out of $HOME.
pub fn pin() -> Command {
    let mut cmd = cargo_bin_cmd!("pinard");
    cmd.env("PINARD_CONFIG_DIR", config_dir());
    cmd.env_remove("GOOGLE_CLIENT_ID");
    cmd.env_remove("GOOGLE_CLIENT_SECRET");
    cmd.env_remove("GOOGLE_REDIRECT_URI");
    cmd
}

pub fn config_dir() -> PathBuf {
    env::temp_dir().join("pinard_tests_config")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_pinard.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_pinard_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn add(db_path: &str, name: &str, start: &str, end: &str, rate: &str, days: &str) {
    pin()
        .args([
            "--db", db_path, "add", "--name", name, "--start", start, "--end", end, "--rate",
            rate, "--days", days,
        ])
        .assert()
        .success();
}

/// Initialize DB and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    pin()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    add(db_path, "Ana", "8", "18", "20", "5");
    add(db_path, "Bruno", "9", "13", "15", "2");
    add(db_path, "Carla", "7.5", "15", "10", "1");
}
