#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use goalbook::config::Config;
use goalbook::db::store::Store;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn gbk() -> Command {
    cargo_bin_cmd!("goalbook")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_goalbook.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Open a store on a fresh temp database for library-level tests
pub fn test_store(name: &str) -> Store {
    let cfg = Config {
        database: setup_test_db(name),
        max_connections: 2,
        queries: None,
    };
    Store::open(&cfg).expect("open store")
}

/// Initialize DB and register one user useful for many tests
pub fn init_db_with_user(db_path: &str) {
    gbk()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    gbk()
        .args([
            "--db", db_path, "user", "add", "--first", "Ann", "--last", "Lee", "--nick", "annl",
            "--password", "x", "--email", "a@b.c", "--salary", "1000.0",
        ])
        .assert()
        .success();
}
