//! Project dependency installation.

use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::error::{DevbootError, Result};
use crate::runner::step::{run_step, CommandRunner};
use crate::ui::UserInterface;

/// Path of the dependency manifest for a project.
pub fn manifest_path(project_root: &Path, settings: &Settings) -> PathBuf {
    project_root.join(&settings.manifest)
}

/// Whether the dependency manifest exists. Its contents are never read.
pub fn manifest_present(project_root: &Path, settings: &Settings) -> bool {
    manifest_path(project_root, settings).is_file()
}

/// Install the project's dependencies.
///
/// Without a manifest in `project_root` this fails with
/// `ManifestNotFound` and `run` is never called. Otherwise the install
/// command's exit status decides the result.
pub fn install_dependencies(
    project_root: &Path,
    settings: &Settings,
    ui: &mut dyn UserInterface,
    run: CommandRunner<'_>,
) -> Result<()> {
    ui.message("Installing project dependencies...");
    ui.message("This may take a few minutes...");

    let manifest = manifest_path(project_root, settings);
    if !manifest.is_file() {
        tracing::debug!("Manifest missing at {}", manifest.display());
        ui.error(&format!("{} not found!", settings.manifest));
        ui.show_hint("Make sure you're running devboot from the project root directory.");
        return Err(DevbootError::ManifestNotFound { path: manifest });
    }

    let result = run_step(&settings.install_command, ui, run)?;
    if result.success {
        Ok(())
    } else {
        Err(DevbootError::CommandFailed {
            command: settings.install_command.clone(),
            code: result.exit_code,
        })
    }
}
