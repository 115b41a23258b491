#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rust_xlsxwriter::Workbook;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn ts() -> Command {
    cargo_bin_cmd!("timestudy")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_timestudy.sqlite", name));
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

/// Create a fresh temporary directory and return its path
pub fn temp_dir_for(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_timestudy_dir", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp dir");
    path.to_string_lossy().to_string()
}

/// Write a workbook in the expected time-study layout: headers in row 3
/// (columns B and D), data from row 4.
pub fn write_workbook(path: &str, rows: &[(&str, Option<f64>)]) {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    worksheet.write(2, 1, "Action").unwrap();
    worksheet.write(2, 3, "Seconds").unwrap();

    for (i, (name, seconds)) in rows.iter().enumerate() {
        let row = 3 + i as u32;
        worksheet.write(row, 1, *name).unwrap();
        if let Some(s) = seconds {
            worksheet.write(row, 3, *s).unwrap();
        }
    }

    workbook.save(path).expect("save workbook fixture");
}

/// Write a workbook whose header row does not match the expected layout.
pub fn write_bad_header_workbook(path: &str) {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    worksheet.write(2, 1, "Task").unwrap();
    worksheet.write(2, 3, "Minutes").unwrap();
    worksheet.write(3, 1, "Walk").unwrap();
    worksheet.write(3, 3, 12.5).unwrap();

    workbook.save(path).expect("save workbook fixture");
}

/// Count rows of a table in the given database.
pub fn count_rows(db_path: &str, table: &str) -> i64 {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
        row.get(0)
    })
    .unwrap_or(0)
}

/// Load (action_name, time) pairs recorded for the given file name.
pub fn load_actions(db_path: &str, file_name: &str) -> Vec<(String, Option<f64>)> {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    let mut stmt = conn
        .prepare(
            "SELECT a.action_name, a.time
             FROM Actions a
             JOIN Files f ON f.id = a.id
             WHERE f.name = ?1
             ORDER BY a.rowid ASC",
        )
        .expect("prepare");

    let rows = stmt
        .query_map([file_name], |row| Ok((row.get(0)?, row.get(1)?)))
        .expect("query");

    rows.map(|r| r.expect("row")).collect()
}
