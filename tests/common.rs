#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn ss() -> Command {
    cargo_bin_cmd!("safesailing")
}

/// `safesailing --db <db> --test`, so the user's config file is never read.
pub fn ss_db(db_path: &str) -> Command {
    let mut cmd = ss();
    cmd.args(["--db", db_path, "--test"]);
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_safesailing.sqlite", name));
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
    ss_db(db_path).arg("init").assert().success();
}

/// Initialize DB and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);

    ss_db(db_path)
        .args([
            "add",
            "2099-06-01",
            "--full-day",
            "--reason",
            "Storm warning",
            "--refund",
            "40",
        ])
        .assert()
        .success();

    ss_db(db_path)
        .args([
            "add",
            "2099-06-10",
            "--start",
            "09:00",
            "--end",
            "12:00",
            "--reason",
            "Strong wind",
        ])
        .assert()
        .success();
}
