use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db_with_data, plg, setup_test_db, temp_out};

#[test]
fn test_export_actions_csv() {
    let db_path = setup_test_db("export_actions_csv");
    init_db_with_data(&db_path);

    let out = temp_out("export_actions_csv", "csv");

    plg()
        .args([
            "--db", &db_path, "--test", "export", "--format", "csv", "--file", &out,
        ])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read csv");
    let mut lines = content.lines();

    let header = lines.next().expect("header row");
    assert!(header.starts_with("id,login,date,shop_name,shop_address"));

    // chronological: 01.07 before 02.07 even though it was added second
    let first = lines.next().expect("first row");
    assert!(first.contains("01.07.2025"));
    let second = lines.next().expect("second row");
    assert!(second.contains("02.07.2025"));
}

#[test]
fn test_export_actions_json() {
    let db_path = setup_test_db("export_actions_json");
    init_db_with_data(&db_path);

    let out = temp_out("export_actions_json", "json");

    plg()
        .args([
            "--db", &db_path, "--test", "export", "--format", "json", "--file", &out,
        ])
        .assert()
        .success()
        .stdout(contains("JSON export completed"));

    let content = fs::read_to_string(&out).expect("read json");
    let parsed: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = parsed.as_array().expect("array");

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["date"], "01.07.2025");
    assert_eq!(rows[0]["shop_address"], "Market Sq 1");
}

#[test]
fn test_export_actions_xlsx() {
    let db_path = setup_test_db("export_actions_xlsx");
    init_db_with_data(&db_path);

    let out = temp_out("export_actions_xlsx", "xlsx");

    plg()
        .args([
            "--db", &db_path, "--test", "export", "--format", "xlsx", "--file", &out,
        ])
        .assert()
        .success()
        .stdout(contains("XLSX export completed"));

    assert!(std::path::Path::new(&out).exists());
}

#[test]
fn test_export_with_range_filter() {
    let db_path = setup_test_db("export_range");
    init_db_with_data(&db_path);

    plg()
        .args([
            "--db",
            &db_path,
            "--test",
            "add",
            "15.08.2025",
            "--shop",
            "Galaxy Store",
            "--address",
            "Station Rd 2",
            "--start",
            "09:00",
            "--end",
            "17:00",
        ])
        .assert()
        .success();

    let out = temp_out("export_range", "csv");

    plg()
        .args([
            "--db", &db_path, "--test", "export", "--format", "csv", "--file", &out, "--range",
            "07.2025",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read csv");
    assert!(content.contains("01.07.2025"));
    assert!(content.contains("02.07.2025"));
    assert!(!content.contains("15.08.2025"));
}

#[test]
fn test_export_day_range_pair() {
    let db_path = setup_test_db("export_day_pair");
    init_db_with_data(&db_path);

    let out = temp_out("export_day_pair", "csv");

    plg()
        .args([
            "--db",
            &db_path,
            "--test",
            "export",
            "--format",
            "csv",
            "--file",
            &out,
            "--range",
            "01.07.2025:01.07.2025",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read csv");
    assert!(content.contains("01.07.2025"));
    assert!(!content.contains("02.07.2025"));
}

#[test]
fn test_export_empty_range_warns() {
    let db_path = setup_test_db("export_empty_range");
    init_db_with_data(&db_path);

    let out = temp_out("export_empty_range", "csv");

    plg()
        .args([
            "--db", &db_path, "--test", "export", "--format", "csv", "--file", &out, "--range",
            "2031",
        ])
        .assert()
        .success()
        .stdout(contains("No actions found"));

    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_export_requires_absolute_path() {
    let db_path = setup_test_db("export_relative");
    init_db_with_data(&db_path);

    plg()
        .args([
            "--db", &db_path, "--test", "export", "--format", "csv", "--file", "relative.csv",
        ])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_force_overwrite() {
    let db_path = setup_test_db("export_force");
    init_db_with_data(&db_path);

    let out = temp_out("export_force", "csv");
    fs::write(&out, "old content").expect("seed file");

    plg()
        .args([
            "--db", &db_path, "--test", "export", "--format", "csv", "--file", &out, "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read csv");
    assert!(content.contains("01.07.2025"));
}

#[test]
fn test_export_summary_csv() {
    let db_path = setup_test_db("export_summary_csv");

    plg()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    plg()
        .args(["--db", &db_path, "--test", "staff", "--add", "PLH00001"])
        .assert()
        .success();
    plg()
        .args(["--db", &db_path, "--test", "staff", "--add", "PLH00002"])
        .assert()
        .success();

    plg()
        .args([
            "--db",
            &db_path,
            "--test",
            "add",
            "01.07.2025",
            "--shop",
            "Galaxy Store",
            "--address",
            "Main St 5",
            "--start",
            "09:00",
            "--end",
            "17:00",
            "--login",
            "PLH00001",
        ])
        .assert()
        .success();

    let out = temp_out("export_summary_csv", "csv");

    plg()
        .args([
            "--db", &db_path, "--test", "export", "--summary", "--month", "07.2025", "--format",
            "csv", "--file", &out,
        ])
        .assert()
        .success()
        .stdout(contains("Summary CSV export completed"));

    let content = fs::read_to_string(&out).expect("read csv");
    let mut lines = content.lines();

    assert_eq!(lines.next(), Some("login,hours"));
    assert_eq!(lines.next(), Some("PLH00001,8.00"));
    assert_eq!(lines.next(), Some("PLH00002,0.00"));
}

#[test]
fn test_export_summary_xlsx() {
    let db_path = setup_test_db("export_summary_xlsx");

    plg()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    plg()
        .args(["--db", &db_path, "--test", "staff", "--add", "PLH00001"])
        .assert()
        .success();

    let out = temp_out("export_summary_xlsx", "xlsx");

    plg()
        .args([
            "--db", &db_path, "--test", "export", "--summary", "--month", "07.2025", "--format",
            "xlsx", "--file", &out,
        ])
        .assert()
        .success()
        .stdout(contains("Summary XLSX export completed"));

    assert!(std::path::Path::new(&out).exists());
}
