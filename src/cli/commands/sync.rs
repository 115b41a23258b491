use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::sync::SyncLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;
use std::path::Path;

/// Sync a completed spreadsheet into the database.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Sync { spreadsheet } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        let report = SyncLogic::sync(&mut pool, Path::new(spreadsheet), &cfg.database)?;

        success(format!(
            "Database {} has been updated with data from {} ({} actions, file id {})",
            report.database.display(),
            spreadsheet,
            report.inserted,
            report.file_id
        ));
    }
    Ok(())
}
