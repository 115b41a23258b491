use predicates::str::contains;
use std::path::Path;

mod common;
use common::{setup_test_db, temp_out, ts, write_workbook};

#[test]
fn test_init_test_mode_creates_schema() {
    let db = setup_test_db("init_schema");

    ts().args(["--db", &db, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    assert_eq!(common::count_rows(&db, "Files"), 0);
    assert_eq!(common::count_rows(&db, "Actions"), 0);
}

#[test]
fn test_db_info_and_check() {
    let db = setup_test_db("db_info");
    ts().args(["--db", &db, "--test", "init"]).assert().success();

    ts().args(["--db", &db, "db", "--info", "--check", "--vacuum"])
        .assert()
        .success()
        .stdout(contains("Files:"))
        .stdout(contains("Integrity check passed"))
        .stdout(contains("VACUUM completed"));
}

#[test]
fn test_log_records_operations() {
    let db = setup_test_db("log_entries");
    let wb = temp_out("log_entries", "xlsx");
    write_workbook(&wb, &[("Walk", Some(1.0))]);

    ts().args(["--db", &db, "--test", "init"]).assert().success();
    ts().args(["--db", &db, "sync", &wb]).assert().success();

    ts().args(["--db", &db, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("[init]"))
        .stdout(contains("[sync]"));
}

#[test]
fn test_list_files_and_actions() {
    let db = setup_test_db("list_cmd");
    let wb = temp_out("list_cmd", "xlsx");
    write_workbook(&wb, &[("Walk", Some(12.5)), ("Lift", Some(8.0))]);
    ts().args(["--db", &db, "sync", &wb]).assert().success();

    ts().args(["--db", &db, "list"])
        .assert()
        .success()
        .stdout(contains(wb.as_str()))
        .stdout(contains("2"));

    ts().args(["--db", &db, "list", "--study", "1"])
        .assert()
        .success()
        .stdout(contains("Walk"))
        .stdout(contains("12.5"));
}

#[test]
fn test_list_empty_database() {
    let db = setup_test_db("list_empty");

    ts().args(["--db", &db, "list"])
        .assert()
        .success()
        .stdout(contains("No synced spreadsheets yet"));
}

#[test]
fn test_backup_plain_and_compressed() {
    let db = setup_test_db("backup_cmd");
    ts().args(["--db", &db, "--test", "init"]).assert().success();

    let plain = temp_out("backup_plain", "sqlite");
    ts().args(["--db", &db, "backup", "--file", &plain])
        .assert()
        .success()
        .stdout(contains("Backup created"));
    assert!(Path::new(&plain).is_file());

    let compressed = temp_out("backup_zip", "sqlite");
    ts().args(["--db", &db, "backup", "--file", &compressed, "--compress"])
        .assert()
        .success()
        .stdout(contains("Compressed backup"));
    assert!(Path::new(&compressed).with_extension("zip").is_file());
    assert!(!Path::new(&compressed).exists(), "uncompressed copy removed");
}

#[test]
fn test_config_edit_fails_when_no_editor_available() {
    ts().env("EDITOR", "/nonexistent/editor-a")
        .env("VISUAL", "/nonexistent/editor-b")
        .args(["config", "--edit", "--editor", "/nonexistent/editor-c"])
        .assert()
        .failure()
        .stderr(contains("Configuration error"));
}

#[test]
fn test_config_print_shows_paths() {
    ts().args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("database:"))
        .stdout(contains("destination_dir:"))
        .stdout(contains("template_file:"));
}
