//! Provisioning of dated study folders.

use crate::errors::{AppError, AppResult};
use crate::utils::date;
use crate::utils::path::expand_tilde;
use std::fs::{self, File, FileTimes};
use std::path::{Path, PathBuf};
use std::process::Command;

/// High-level business logic for the `new` command.
pub struct ProvisionLogic;

impl ProvisionLogic {
    /// Create `"<base_name> <today>"` under `destination`, with a `Videos`
    /// subfolder and a renamed copy of the template workbook inside it.
    ///
    /// All validation happens before the first filesystem write: a failure
    /// never leaves a half-created folder behind. Returns the path of the
    /// copied workbook.
    pub fn provision(base_name: &str, destination: &str, template: &str) -> AppResult<PathBuf> {
        let base_name = base_name.trim();
        if base_name.is_empty() {
            return Err(AppError::EmptyName);
        }

        let destination = expand_tilde(destination);
        if !destination.is_dir() {
            return Err(AppError::DestinationNotFound(
                destination.display().to_string(),
            ));
        }

        let template = expand_tilde(template);
        if !template.is_file() {
            return Err(AppError::TemplateNotFound(template.display().to_string()));
        }

        let stamped_name = format!("{} {}", base_name, date::today_stamp());
        let folder = destination.join(&stamped_name);

        if folder.exists() {
            return Err(AppError::FolderAlreadyExists(folder.display().to_string()));
        }

        // create_dir (not create_dir_all): never silently merge into an
        // existing folder, even if it appeared after the check above.
        fs::create_dir(&folder).map_err(|e| match e.kind() {
            std::io::ErrorKind::AlreadyExists => {
                AppError::FolderAlreadyExists(folder.display().to_string())
            }
            _ => AppError::Io(e),
        })?;
        fs::create_dir(folder.join("Videos"))?;

        let extension = template
            .extension()
            .map(|e| e.to_string_lossy().to_string())
            .unwrap_or_else(|| "xlsx".to_string());
        let copied = folder.join(format!("{stamped_name}.{extension}"));

        copy_with_times(&template, &copied)?;

        Ok(copied)
    }

    /// Provision, then hand the copied workbook to the OS default opener.
    /// Fire-and-forget: the opener's outcome is not observed.
    pub fn provision_and_open(
        base_name: &str,
        destination: &str,
        template: &str,
    ) -> AppResult<PathBuf> {
        let copied = Self::provision(base_name, destination, template)?;
        open_with_default_handler(&copied);
        Ok(copied)
    }
}

/// Copy `src` to `dest`, preserving modified/accessed timestamps.
fn copy_with_times(src: &Path, dest: &Path) -> AppResult<()> {
    let meta = fs::metadata(src)?;
    fs::copy(src, dest)?;

    let mut times = FileTimes::new();
    if let Ok(modified) = meta.modified() {
        times = times.set_modified(modified);
    }
    if let Ok(accessed) = meta.accessed() {
        times = times.set_accessed(accessed);
    }
    File::options().write(true).open(dest)?.set_times(times)?;

    Ok(())
}

fn open_with_default_handler(path: &Path) {
    let result = if cfg!(target_os = "windows") {
        Command::new("cmd")
            .args(["/C", "start", ""])
            .arg(path)
            .spawn()
    } else if cfg!(target_os = "macos") {
        Command::new("open").arg(path).spawn()
    } else {
        Command::new("xdg-open").arg(path).spawn()
    };

    if let Err(e) = result {
        eprintln!("⚠️ Could not open '{}': {}", path.display(), e);
    }
}
