use crate::errors::{AppError, AppResult};
use crate::export::model::{ActionExport, action_to_row, get_headers};
use crate::export::notify_export_success;
use csv::Writer;
use std::path::Path;

pub(crate) fn export_csv(actions: &[ActionExport], path: &Path) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(get_headers())?;

    for a in actions {
        wtr.write_record(action_to_row(a))?;
    }

    wtr.flush()?;
    notify_export_success("CSV", path);
    Ok(())
}

pub(crate) fn export_json(actions: &[ActionExport], path: &Path) -> AppResult<()> {
    let json =
        serde_json::to_string_pretty(actions).map_err(|e| AppError::Export(e.to_string()))?;
    std::fs::write(path, json)?;
    notify_export_success("JSON", path);
    Ok(())
}
