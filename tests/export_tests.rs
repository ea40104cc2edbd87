mod common;
use common::{init_db, init_db_with_data, rtb, setup_test_db, temp_out};
use predicates::str::contains;
use std::fs;

#[test]
fn test_export_csv_all() {
    let db_path = setup_test_db("export_csv_all");
    init_db_with_data(&db_path);

    let out = temp_out("export_csv_all", "csv");

    rtb()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    let mut lines = content.lines();
    assert!(lines.next().unwrap().starts_with("date,entry_time,lunch_start"));
    assert!(content.contains("2025-09-01,09:00,12:00,13:00,19:00,true,540,480,60,+01:00"));
    assert!(content.contains("2025-09-02"));
    assert!(content.contains("-00:30"));
}

#[test]
fn test_export_json_range() {
    let db_path = setup_test_db("export_json_range");
    init_db_with_data(&db_path);

    let out = temp_out("export_json_range", "json");

    rtb()
        .args([
            "--db",
            &db_path,
            "export",
            "--format",
            "json",
            "--file",
            &out,
            "--range",
            "2025-09-02",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = rows.as_array().expect("json array");

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["date"], "2025-09-02");
    assert_eq!(rows[0]["timebank_minutes"], -30);
    assert_eq!(rows[0]["timebank"], "-00:30");
}

#[test]
fn test_export_incomplete_day_has_zero_timebank() {
    let db_path = setup_test_db("export_incomplete");
    init_db(&db_path);

    rtb()
        .args(["--db", &db_path, "add", "2025-09-05", "--in", "09:00"])
        .assert()
        .success();

    let out = temp_out("export_incomplete", "json");

    rtb()
        .args(["--db", &db_path, "export", "--format", "json", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");

    assert_eq!(rows[0]["complete"], false);
    assert_eq!(rows[0]["exit_time"], serde_json::Value::Null);
    assert_eq!(rows[0]["timebank_minutes"], 0);
}

#[test]
fn test_export_empty_range_writes_nothing() {
    let db_path = setup_test_db("export_empty_range");
    init_db_with_data(&db_path);

    let out = temp_out("export_empty_range", "csv");

    rtb()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &out, "--range", "2020",
        ])
        .assert()
        .success()
        .stdout(contains("Nothing to export"));

    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_export_existing_file_requires_force() {
    let db_path = setup_test_db("export_force");
    init_db_with_data(&db_path);

    let out = temp_out("export_force", "csv");
    fs::write(&out, "old").unwrap();

    rtb()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("Export cancelled"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "old");

    rtb()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &out, "--force",
        ])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().contains("2025-09-01"));
}

#[test]
fn test_export_invalid_range() {
    let db_path = setup_test_db("export_invalid_range");
    init_db_with_data(&db_path);

    let out = temp_out("export_invalid_range", "csv");

    rtb()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &out, "--range", "2025-9-x",
        ])
        .assert()
        .failure();
}
