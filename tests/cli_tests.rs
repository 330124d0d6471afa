use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::{env, fs};

mod common;
use common::{add_run, init_with_data, setup_test_file, slg, temp_out};

#[test]
fn test_init_creates_empty_file() {
    let data = setup_test_file("init_empty");

    slg()
        .args(["--data", &data, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Scores file"));

    assert_eq!(fs::read_to_string(&data).unwrap(), "");

    slg()
        .args(["--data", &data, "top"])
        .assert()
        .success()
        .stdout(contains("No numeric 5K totals recorded yet."));
}

#[test]
fn test_add_writes_header_once() {
    let data = setup_test_file("add_header_once");
    init_with_data(&data);

    let content = fs::read_to_string(&data).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(
        lines[0],
        "Date,Total_5k,Split_1k,Split_2k,Split_3k,Split_4k,Split_5k"
    );
    assert_eq!(lines[3], "2025-09-15,N/A,4.9,N/A,5.0,5.0,5.0");
}

#[test]
fn test_add_rejects_bad_field() {
    let data = setup_test_file("add_reject");

    slg()
        .args([
            "--data", &data, "add", "22.5", "4.4", "abc", "4.5", "4.6", "4.7",
        ])
        .assert()
        .failure()
        .stderr(contains("Split 2K").and(contains("abc")));

    assert!(!std::path::Path::new(&data).exists());
}

#[test]
fn test_add_rejects_bad_date() {
    let data = setup_test_file("add_bad_date");

    slg()
        .args([
            "--data", &data, "add", "22", "4", "4", "4", "4", "4", "--date", "2025-02-30",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_top_lists_fastest_first() {
    let data = setup_test_file("top_fastest");
    init_with_data(&data);

    let output = slg()
        .args(["--data", &data, "top"])
        .output()
        .expect("run top");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let p22 = stdout.find("22.1").expect("22.1 listed");
    let p25 = stdout.find("25.3").expect("25.3 listed");
    let p30 = stdout.find("30.0").expect("30.0 listed");
    assert!(p22 < p25 && p25 < p30);
    assert!(!stdout.contains("N/A"));
}

#[test]
fn test_top_respects_count() {
    let data = setup_test_file("top_count");
    init_with_data(&data);

    slg()
        .args(["--data", &data, "top", "-n", "1"])
        .assert()
        .success()
        .stdout(contains("22.1").and(contains("25.3").not()));
}

#[test]
fn test_recent_newest_first_with_graph() {
    let data = setup_test_file("recent_graph");
    init_with_data(&data);

    let output = slg()
        .args(["--data", &data, "recent"])
        .output()
        .expect("run recent");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let newest = stdout.find("2025-09-22").expect("newest listed");
    let oldest = stdout.find("2025-09-01").expect("oldest listed");
    assert!(newest < oldest);
    assert!(stdout.contains("N/A"));
    assert!(stdout.contains("newest on the right"));
}

#[test]
fn test_recent_window_of_ten() {
    let data = setup_test_file("recent_window");
    for day in 1..=12 {
        add_run(
            &data,
            &format!("2025-10-{day:02}"),
            ["24.0", "4.8", "4.8", "4.8", "4.8", "4.8"],
        );
    }

    slg()
        .args(["--data", &data, "recent", "--no-graph"])
        .assert()
        .success()
        .stdout(
            contains("2025-10-12")
                .and(contains("2025-10-03"))
                .and(contains("2025-10-02").not())
                .and(contains("newest on the right").not()),
        );
}

#[test]
fn test_recent_all_missing_has_no_graph() {
    let data = setup_test_file("recent_no_graph");
    add_run(&data, "2025-10-01", ["N/A", "4.8", "4.8", "4.8", "4.8", "4.8"]);

    slg()
        .args(["--data", &data, "recent"])
        .assert()
        .success()
        .stdout(contains("No numeric 5K totals to graph."));
}

#[test]
fn test_corrupt_file_is_reported_not_fatal() {
    let data = setup_test_file("corrupt_file");
    fs::write(
        &data,
        "Date,Total_5k,Split_1k,Split_2k,Split_3k,Split_4k,Split_5k\nnot-a-date,1,1,1,1,1,1\n",
    )
    .unwrap();

    slg()
        .args(["--data", &data, "top"])
        .assert()
        .success()
        .stderr(contains("Unable to read scores"));

    slg()
        .args(["--data", &data, "recent"])
        .assert()
        .success()
        .stderr(contains("Unable to read scores"));
}

#[test]
fn test_log_records_operations() {
    let data = setup_test_file("log_ops");
    init_with_data(&data);

    slg()
        .args(["--data", &data, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init").and(contains("2025-09-22")));
}

#[test]
fn test_export_json_all() {
    let data = setup_test_file("export_json_all");
    init_with_data(&data);
    let out = temp_out("export_json_all", "json");

    slg()
        .args([
            "--data", &data, "export", "--format", "json", "--file", &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    assert!(content.contains("2025-09-01"));
    assert!(content.contains("\"N/A\""));
}

#[test]
fn test_export_csv_range() {
    let data = setup_test_file("export_csv_range");
    init_with_data(&data);
    let out = temp_out("export_csv_range", "csv");

    slg()
        .args([
            "--data",
            &data,
            "export",
            "--format",
            "csv",
            "--file",
            &out,
            "--range",
            "2025-09-08:2025-09-15",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("2025-09-08"));
    assert!(content.contains("2025-09-15"));
    assert!(!content.contains("2025-09-01"));
    assert!(!content.contains("2025-09-22"));
}

#[test]
fn test_backup_copy() {
    let data = setup_test_file("backup_copy");
    init_with_data(&data);
    let out = temp_out("backup_copy", "csv");

    slg()
        .args(["--data", &data, "backup", "--file", &out, "--force"])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    assert_eq!(
        fs::read_to_string(&out).unwrap(),
        fs::read_to_string(&data).unwrap()
    );
}

#[test]
fn test_menu_session_over_stdin() {
    let data = setup_test_file("menu_stdin");

    slg()
        .args(["--data", &data, "menu"])
        .write_stdin("5\n21.5\n4.3\n4.3\n4.3\n4.3\n4.3\n:submit\n:back\n1\n:back\nq\n")
        .assert()
        .success()
        .stdout(contains("Saved run of").and(contains("21:30")));

    let content = fs::read_to_string(&data).unwrap();
    assert!(content.contains(",21.5,4.3,4.3,4.3,4.3,4.3"));
}

#[test]
fn test_data_file_ending_in_log_keeps_its_own_log() {
    let mut path = env::temp_dir();
    path.push("dot_log_data_splitlog.log");
    let data = path.to_string_lossy().to_string();
    fs::remove_file(&data).ok();
    fs::remove_file(format!("{data}.log")).ok();

    init_with_data(&data);

    let output = slg()
        .args(["--data", &data, "top"])
        .output()
        .expect("run top");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stdout.contains("22.1"), "top output: {stdout}");
    assert!(!stderr.contains("Unable to read scores"), "stderr: {stderr}");

    let content = fs::read_to_string(&data).expect("read data");
    assert!(content.starts_with("Date,Total_5k"));
    assert_eq!(content.lines().count(), 5);
    assert!(fs::read_to_string(format!("{data}.log")).expect("read log").contains("add"));
}
