use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::provision::ProvisionLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Create a dated study folder and copy the template workbook into it.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::New {
        name,
        dest,
        template,
        open,
    } = cmd
    {
        // CLI overrides fall back to the configured defaults.
        let destination = dest.as_deref().unwrap_or(&cfg.destination_dir);
        let template = template.as_deref().unwrap_or(&cfg.template_file);

        let copied = if *open {
            ProvisionLogic::provision_and_open(name, destination, template)?
        } else {
            ProvisionLogic::provision(name, destination, template)?
        };

        success(format!(
            "Folder '{}' and the renamed spreadsheet '{}' have been created.",
            copied.parent().map(|p| p.display().to_string()).unwrap_or_default(),
            copied.display()
        ));
    }
    Ok(())
}
