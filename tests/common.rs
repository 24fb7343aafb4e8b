#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn plg() -> Command {
    cargo_bin_cmd!("promolog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_promolog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize DB and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    // init DB (creates tables)
    plg()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    // two July actions, out of chronological order on purpose
    plg()
        .args([
            "--db",
            db_path,
            "--test",
            "add",
            "02.07.2025",
            "--shop",
            "Galaxy Store",
            "--address",
            "Main St 5",
            "--start",
            "09:00",
            "--end",
            "17:00",
        ])
        .assert()
        .success();

    plg()
        .args([
            "--db",
            db_path,
            "--test",
            "add",
            "01.07.2025",
            "--shop",
            "Corner Kiosk",
            "--address",
            "Market Sq 1",
            "--start",
            "10:00",
            "--end",
            "14:00",
        ])
        .assert()
        .success();
}
