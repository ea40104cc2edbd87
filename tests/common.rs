#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, isolated from the user's real config directory.
pub fn rtb() -> Command {
    let home = env::temp_dir().join("rtimebank_test_home");
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("rtimebank");
    cmd.env("HOME", &home).env("APPDATA", &home);
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimebank.sqlite", name));
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

pub fn init_db(db_path: &str) {
    rtb()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Add a full day (with the default 12:00-13:00 lunch).
pub fn add_day(db_path: &str, date: &str, entry: &str, exit: &str) {
    rtb()
        .args([
            "--db",
            db_path,
            "add",
            date,
            "--in",
            entry,
            "--lunch-start",
            "12:00",
            "--lunch-end",
            "13:00",
            "--out",
            exit,
        ])
        .assert()
        .success();
}

/// Initialize the DB with the default 09:00-18:00 schedule and two days:
/// 2025-09-01 one hour over, 2025-09-02 half an hour short.
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);
    add_day(db_path, "2025-09-01", "09:00", "19:00");
    add_day(db_path, "2025-09-02", "09:00", "17:30");
}
