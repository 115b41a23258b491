//! Reading of completed time-study workbooks.
//!
//! The layout contract is fixed: row 3 is the header row with "Action" in
//! column B and "Seconds" in column D; data starts at row 4 in the same
//! columns; the first blank action-name cell ends the table. Workbooks are
//! opened with cached formula results, so a `Seconds` column computed from
//! start/stop timestamps reads back as plain numbers.

use crate::errors::{AppError, AppResult};
use crate::models::ActionRow;
use calamine::{Data, Range, Reader, open_workbook_auto};
use std::path::Path;

// 0-based absolute cell coordinates of the fixed layout.
const HEADER_ROW: u32 = 2;
const ACTION_COL: u32 = 1;
const SECONDS_COL: u32 = 3;
const FIRST_DATA_ROW: u32 = 3;

const ACTION_HEADER: &str = "Action";
const SECONDS_HEADER: &str = "Seconds";

/// Open the workbook at `path` and return the parsed action rows from its
/// first sheet.
///
/// Fails with `UnreadableFile` when the file is not a spreadsheet at all,
/// and with `InvalidFormat` when the header cells do not match the expected
/// layout. Nothing is read past the end-of-table sentinel.
pub fn read_action_rows(path: &Path) -> AppResult<Vec<ActionRow>> {
    let display = path.display().to_string();

    let mut workbook =
        open_workbook_auto(path).map_err(|_| AppError::UnreadableFile(display.clone()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| AppError::UnreadableFile(display.clone()))?
        .map_err(|_| AppError::UnreadableFile(display))?;

    validate_header(&range)?;

    Ok(scan_rows(&range))
}

fn validate_header(range: &Range<Data>) -> AppResult<()> {
    let action = header_cell(range, ACTION_COL);
    let seconds = header_cell(range, SECONDS_COL);

    if action.as_deref() != Some(ACTION_HEADER) || seconds.as_deref() != Some(SECONDS_HEADER) {
        return Err(AppError::InvalidFormat(format!(
            "expected '{}'/'{}' headers in row 3, found {:?}/{:?}",
            ACTION_HEADER, SECONDS_HEADER, action, seconds
        )));
    }
    Ok(())
}

fn header_cell(range: &Range<Data>, col: u32) -> Option<String> {
    match range.get_value((HEADER_ROW, col)) {
        Some(Data::String(s)) => Some(s.trim().to_string()),
        _ => None,
    }
}

/// Walk data rows until the end-of-table sentinel (blank action name).
fn scan_rows(range: &Range<Data>) -> Vec<ActionRow> {
    let mut rows = Vec::new();
    let last_row = match range.end() {
        Some((r, _)) => r,
        None => return rows,
    };

    for row in FIRST_DATA_ROW..=last_row {
        let name = match action_name(range.get_value((row, ACTION_COL))) {
            Some(n) => n,
            None => break,
        };
        let seconds = seconds_value(range.get_value((row, SECONDS_COL)));
        rows.push(ActionRow::new(name, seconds));
    }

    rows
}

fn action_name(cell: Option<&Data>) -> Option<String> {
    match cell {
        Some(Data::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
        // Numeric labels are legal action names; Excel stores them as numbers.
        Some(Data::Float(f)) => Some(trim_float(*f)),
        Some(Data::Int(i)) => Some(i.to_string()),
        _ => None,
    }
}

fn seconds_value(cell: Option<&Data>) -> Option<f64> {
    match cell {
        Some(Data::Float(f)) => Some(*f),
        Some(Data::Int(i)) => Some(*i as f64),
        Some(Data::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

fn trim_float(f: f64) -> String {
    if f.fract() == 0.0 {
        format!("{}", f as i64)
    } else {
        f.to_string()
    }
}
