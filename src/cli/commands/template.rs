use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::template::TemplateLogic;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use std::path::Path;

/// Write a blank time-study template workbook.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Template { file, force } = cmd {
        let target = file.as_deref().unwrap_or(&cfg.template_file);
        let path = Path::new(target);

        if path.exists() && !force {
            return Err(AppError::Other(format!(
                "Template '{}' already exists (use --force to overwrite)",
                path.display()
            )));
        }

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        TemplateLogic::write(path)?;
        success(format!("Template written: {}", path.display()));
    }
    Ok(())
}
