use predicates::str::contains;
use std::fs;
use std::path::Path;

mod common;
use common::{setup_test_db, temp_out, ts, write_workbook};

fn synced_db(name: &str) -> String {
    let db = setup_test_db(name);
    let wb = temp_out(&format!("{name}_wb"), "xlsx");
    write_workbook(&wb, &[("Walk", Some(12.5)), ("Lift", Some(8.0))]);
    ts().args(["--db", &db, "sync", &wb]).assert().success();
    db
}

#[test]
fn test_export_csv_contains_actions() {
    let db = synced_db("export_csv");
    let out = temp_out("export_csv", "csv");

    ts().args(["--db", &db, "export", "--format", "csv", "--file", &out, "-f"])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.starts_with("file_id,file,action,seconds"));
    assert!(content.contains("Walk"));
    assert!(content.contains("12.5"));
    assert!(content.contains("Lift"));
}

#[test]
fn test_export_json_contains_actions() {
    let db = synced_db("export_json");
    let out = temp_out("export_json", "json");

    ts().args(["--db", &db, "export", "--format", "json", "--file", &out, "-f"])
        .assert()
        .success();

    let content = fs::read_to_string(&out).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
    let rows = parsed.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["action"], "Walk");
    assert_eq!(rows[0]["seconds"], 12.5);
}

#[test]
fn test_export_xlsx_writes_typed_cells() {
    let db = synced_db("export_xlsx");
    let out = temp_out("export_xlsx", "xlsx");

    ts().args(["--db", &db, "export", "--format", "xlsx", "--file", &out, "-f"])
        .assert()
        .success()
        .stdout(contains("XLSX export completed"));

    assert!(Path::new(&out).is_file());

    // Numeric columns must come back as numbers, not text.
    use calamine::{Data, Reader, open_workbook_auto};
    let mut workbook = open_workbook_auto(&out).unwrap();
    let range = workbook.worksheet_range_at(0).unwrap().unwrap();

    assert_eq!(range.get_value((0, 0)), Some(&Data::String("file_id".into())));
    assert_eq!(range.get_value((1, 0)), Some(&Data::Float(1.0)));
    assert_eq!(range.get_value((1, 2)), Some(&Data::String("Walk".into())));
    assert_eq!(range.get_value((1, 3)), Some(&Data::Float(12.5)));
    assert_eq!(range.get_value((2, 3)), Some(&Data::Float(8.0)));
}

#[test]
fn test_export_study_filter() {
    let db = setup_test_db("export_filter");
    let wb1 = temp_out("export_filter_a", "xlsx");
    let wb2 = temp_out("export_filter_b", "xlsx");
    write_workbook(&wb1, &[("Walk", Some(1.0))]);
    write_workbook(&wb2, &[("Pack", Some(2.0))]);
    ts().args(["--db", &db, "sync", &wb1]).assert().success();
    ts().args(["--db", &db, "sync", &wb2]).assert().success();

    let out = temp_out("export_filter", "csv");
    ts().args([
        "--db", &db, "export", "--format", "csv", "--file", &out, "--study", "2", "-f",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.contains("Pack"));
    assert!(!content.contains("Walk"));
}

#[test]
fn test_export_relative_path_is_rejected() {
    let db = synced_db("export_relpath");

    ts().args(["--db", &db, "export", "--file", "relative_out.csv", "-f"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}
