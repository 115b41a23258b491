use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::ActionExport;
use crate::export::xlsx::export_xlsx;
use crate::ui::messages::warning;
use crate::utils::path::is_absolute;
use std::io;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export synced actions to `file`.
    ///
    /// - `format`: csv | json | xlsx
    /// - `study`: restrict the export to one file id
    /// - `force`: overwrite the output file without asking
    pub fn export(
        pool: &mut DbPool,
        format: &ExportFormat,
        file: &str,
        study: Option<i64>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !is_absolute(file) {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        ensure_writable(path, force)?;

        let actions = load_actions(pool, study)?;

        if actions.is_empty() {
            warning("No actions found to export.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => export_csv(&actions, path)?,
            ExportFormat::Json => export_json(&actions, path)?,
            ExportFormat::Xlsx => export_xlsx(&actions, path)?,
        }

        Ok(())
    }
}

fn load_actions(pool: &mut DbPool, study: Option<i64>) -> AppResult<Vec<ActionExport>> {
    let base = "SELECT f.id, f.name, a.action_name, a.time
                FROM Files f
                JOIN Actions a ON a.id = f.id";

    let sql = match study {
        Some(_) => format!("{base} WHERE f.id = ?1 ORDER BY f.id, a.rowid"),
        None => format!("{base} ORDER BY f.id, a.rowid"),
    };

    let mut stmt = pool.conn.prepare(&sql)?;

    let map = |row: &rusqlite::Row| {
        Ok(ActionExport {
            file_id: row.get(0)?,
            file: row.get(1)?,
            action: row.get(2)?,
            seconds: row.get(3)?,
        })
    };

    let rows = match study {
        Some(id) => stmt.query_map([id], map)?,
        None => stmt.query_map([], map)?,
    };

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
