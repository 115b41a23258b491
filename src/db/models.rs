//! Database row models. Thin wrappers around SQLite rows.

/// One row of the `Files` table: the persisted identity of a spreadsheet
/// that has been synced at least once.
#[derive(Debug, Clone)]
pub struct FileRecord {
    pub id: i64,
    pub name: String,
}

/// One row of the `Actions` table, keyed by its owning file's id.
#[derive(Debug, Clone)]
pub struct ActionRecord {
    pub file_id: i64,
    pub action_name: String,
    pub time: Option<f64>,
}
