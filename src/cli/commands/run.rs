//! Run command implementation.
//!
//! The `devboot run` command provisions tools, installs dependencies and
//! starts the dev server. It is also what a bare `devboot` does.

use std::path::{Path, PathBuf};

use crate::cli::args::RunArgs;
use crate::config::{load_config, DevbootConfig};
use crate::environment::detect_platform;
use crate::error::Result;
use crate::requirements::installer::default_context;
use crate::runner::{RunOptions, Workflow, WorkflowContext};
use crate::shell::{execute, execute_attached, CommandOptions};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Exit code for an unreadable or invalid config file.
pub const CONFIG_ERROR_EXIT: i32 = 2;

/// Load the project config, reporting failures through `ui`.
///
/// Returns `None` when the config is unusable; the caller should exit
/// with [`CONFIG_ERROR_EXIT`].
pub fn load_config_or_report(
    project_root: &Path,
    config_path: Option<&Path>,
    ui: &mut dyn UserInterface,
) -> Option<DevbootConfig> {
    match load_config(project_root, config_path) {
        Ok(config) => Some(config),
        Err(e) => {
            ui.error(&format!("Invalid configuration: {}", e));
            ui.show_hint("Fix .devboot/config.yml or pass a valid file with --config.");
            None
        }
    }
}

/// The run command implementation.
pub struct RunCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: RunArgs,
}

impl RunCommand {
    /// Create a new run command.
    pub fn new(project_root: &Path, config_path: Option<&Path>, args: RunArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            args,
        }
    }

    fn options(&self) -> RunOptions {
        RunOptions {
            port: self.args.port,
            no_server: self.args.no_server,
        }
    }
}

impl Command for RunCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(config) =
            load_config_or_report(&self.project_root, self.config_path.as_deref(), ui)
        else {
            return Ok(CommandResult::failure(CONFIG_ERROR_EXIT));
        };

        let root = self.project_root.as_path();
        let run_install = |cmd: &str| execute(cmd, &CommandOptions::in_dir(root));
        let ctx = WorkflowContext {
            detect_platform: &detect_platform,
            provision: default_context(),
            run_install: &run_install,
            run_server: &execute_attached,
        };

        let result = Workflow::new(root, &config, self.options()).run(ui, &ctx)?;
        tracing::debug!(
            "Workflow finished on {} in {:?} (failed stage: {:?})",
            result.platform,
            result.duration,
            result.failed_stage
        );

        if result.success() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(result.exit_code()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn run_command_creation() {
        let temp = TempDir::new().unwrap();
        let args = RunArgs {
            port: Some(3000),
            ..RunArgs::default()
        };
        let cmd = RunCommand::new(temp.path(), None, args);
        assert_eq!(cmd.options().port, Some(3000));
        assert!(!cmd.options().no_server);
    }

    #[test]
    fn invalid_config_exits_with_config_error() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(".devboot");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.yml"), "settings:\n  port: 0\n").unwrap();

        let cmd = RunCommand::new(temp.path(), None, RunArgs::default());
        let mut ui = MockUI::new();
        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, CONFIG_ERROR_EXIT);
        assert!(ui.has_error("Invalid configuration"));
        assert!(ui.headers().is_empty());
    }

    #[test]
    fn missing_override_config_is_reported() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope.yml");
        let mut ui = MockUI::new();

        assert!(load_config_or_report(temp.path(), Some(&missing), &mut ui).is_none());
        assert!(ui.has_hint("--config"));
    }
}
