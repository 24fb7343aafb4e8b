use predicates::str::contains;
use std::fs;

mod common;
use common::{plg, setup_test_db, temp_out};

/// Legacy API dump: shifting field names across versions, extra fields,
/// and one record with an unusable date.
const LEGACY_DUMP: &str = r#"[
  {
    "id_akcja": 17,
    "action_date": "05.07.2025",
    "type": "Galaxy Store",
    "address": "Main St 5",
    "start_sys": "09:00",
    "stop_sys": "17:00",
    "start_real": "09:05",
    "stop_real": "16:55",
    "szkolenie": true,
    "status": "done"
  },
  {
    "date": "06.07.2025",
    "shop_name": "Corner Kiosk",
    "shop_address": "Market Sq 1",
    "system_start": "10:00",
    "system_end": "14:00"
  },
  {
    "action_date": "junk",
    "start_sys": "09:00",
    "stop_sys": "17:00"
  }
]"#;

#[test]
fn test_import_legacy_dump() {
    let db_path = setup_test_db("import_legacy");

    plg()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    let dump = temp_out("import_legacy", "json");
    fs::write(&dump, LEGACY_DUMP).expect("write dump");

    plg()
        .args(["--db", &db_path, "--test", "import", "--file", &dump])
        .assert()
        .success()
        .stdout(contains("2 action(s) imported, 1 skipped"));

    // Both field-name generations land in the same canonical shape
    plg()
        .args([
            "--db", &db_path, "--test", "list", "--month", "07.2025", "--status", "all",
        ])
        .assert()
        .success()
        .stdout(contains("Main St 5"))
        .stdout(contains("Market Sq 1"))
        .stdout(contains("real 09:05-16:55"))
        .stdout(contains("[training]"));
}

#[test]
fn test_import_rejects_malformed_json() {
    let db_path = setup_test_db("import_bad_json");

    plg()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    let dump = temp_out("import_bad_json", "json");
    fs::write(&dump, "{ not json ]").expect("write dump");

    plg()
        .args(["--db", &db_path, "--test", "import", "--file", &dump])
        .assert()
        .failure()
        .stderr(contains("Import error"));
}

#[test]
fn test_import_missing_file() {
    let db_path = setup_test_db("import_missing_file");

    plg()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    plg()
        .args([
            "--db",
            &db_path,
            "--test",
            "import",
            "--file",
            "/nonexistent/dump.json",
        ])
        .assert()
        .failure()
        .stderr(contains("I/O error"));
}
