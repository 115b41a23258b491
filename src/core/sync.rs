//! Spreadsheet-to-database synchronization.

use crate::core::workbook;
use crate::db::pool::DbPool;
use crate::db::{initialize, log, queries};
use crate::errors::AppResult;
use crate::models::SyncReport;
use std::path::{Path, PathBuf};

/// High-level business logic for the `sync` command.
pub struct SyncLogic;

impl SyncLogic {
    /// Replace the recorded actions for `spreadsheet` with the rows it
    /// currently contains.
    ///
    /// The workbook is parsed and validated *before* any database write,
    /// and all writes happen inside one transaction. A workbook that fails
    /// to open or validate therefore leaves the database exactly as it was,
    /// including the Files row lookup/insert.
    pub fn sync(pool: &mut DbPool, spreadsheet: &Path, db_path: &str) -> AppResult<SyncReport> {
        // Schema creation is implicit and idempotent.
        initialize::init_db(&pool.conn)?;

        // 1. Parse first. A validation failure must not mutate anything.
        let actions = workbook::read_action_rows(spreadsheet)?;

        let name = spreadsheet.to_string_lossy().to_string();

        // 2. One transaction: upsert the file row, replace its actions.
        let tx = pool.conn.transaction()?;

        let file_id = match queries::find_file_id(&tx, &name)? {
            Some(id) => {
                queries::delete_actions_for(&tx, id)?;
                id
            }
            None => queries::insert_file(&tx, &name)?,
        };

        for action in &actions {
            queries::insert_action(&tx, file_id, action)?;
        }

        tx.commit()?;

        // Audit entry is best-effort; a failed log line never fails the sync.
        let _ = log::tslog(
            &pool.conn,
            "sync",
            &name,
            &format!("Synced {} actions (file id {})", actions.len(), file_id),
        );

        Ok(SyncReport {
            file_id,
            inserted: actions.len(),
            database: PathBuf::from(db_path),
        })
    }
}
