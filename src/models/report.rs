use serde::Serialize;
use std::path::PathBuf;

/// Outcome of one spreadsheet-to-database sync.
#[derive(Debug, Clone, Serialize)]
pub struct SyncReport {
    /// Id of the Files row the actions were attached to.
    pub file_id: i64,
    /// How many action rows were inserted in this sync.
    pub inserted: usize,
    /// Resolved path of the database that was updated.
    pub database: PathBuf,
}
