#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn slg() -> Command {
    cargo_bin_cmd!("splitlog")
}

/// Create a unique scores file path inside the system temp dir and remove
/// any existing file (and its operation log)
pub fn setup_test_file(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_splitlog.csv", name));
    fs::remove_file(&path).ok();
    fs::remove_file(format!("{}.log", path.to_string_lossy())).ok();
    path.to_string_lossy().to_string()
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_splitlog_out.{}", name, ext));
    fs::remove_file(&path).ok();
    path.to_string_lossy().to_string()
}

/// Record one run through the CLI
pub fn add_run(data: &str, date: &str, times: [&str; 6]) {
    let mut args = vec!["--data", data, "add"];
    args.extend(times);
    args.extend(["--date", date]);
    slg().args(args).assert().success();
}

/// Initialize the scores file and add a small dataset useful for many tests
pub fn init_with_data(data: &str) {
    slg()
        .args(["--data", data, "--test", "init"])
        .assert()
        .success();

    add_run(data, "2025-09-01", ["25.3", "5.1", "5.0", "5.0", "5.1", "5.1"]);
    add_run(data, "2025-09-08", ["22.1", "4.4", "4.4", "4.5", "4.4", "4.4"]);
    add_run(data, "2025-09-15", ["N/A", "4.9", "na", "5.0", "5.0", "5.0"]);
    add_run(data, "2025-09-22", ["30.0", "6.0", "6.0", "6.0", "6.0", "6.0"]);
}
