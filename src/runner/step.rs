//! Single external command execution with user-facing reporting.

use crate::error::Result;
use crate::shell::CommandResult;
use crate::ui::UserInterface;

/// Runs a shell command, returning its captured result.
pub type CommandRunner<'a> = &'a dyn Fn(&str) -> Result<CommandResult>;

/// Run `command` behind a spinner and report how it went.
///
/// Captured stdout goes to [`UserInterface::command_output`], which only
/// prints it in verbose mode. On failure the exit status and stderr are
/// always shown. Spawn errors are reported and returned.
pub fn run_step(
    command: &str,
    ui: &mut dyn UserInterface,
    run: CommandRunner<'_>,
) -> Result<CommandResult> {
    tracing::debug!("Running: {}", command);
    let mut spinner = ui.start_spinner(&format!("Running: {}", command));

    match run(command) {
        Ok(result) if result.success => {
            spinner.finish_success(command);
            ui.command_output(&result.stdout);
            Ok(result)
        }
        Ok(result) => {
            let status = result.status_label();
            tracing::debug!("`{}` failed with {}", command, status);
            spinner.finish_error(&format!("{} ({})", command, status));
            ui.show_error_block(command, &result);
            Ok(result)
        }
        Err(e) => {
            tracing::debug!("`{}` could not be started: {}", command, e);
            spinner.finish_error(command);
            ui.error(&format!("Could not start `{}`: {}", command, e));
            Err(e)
        }
    }
}
