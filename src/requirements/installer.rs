//! Platform-specific provisioning of required tools.
//!
//! - Termux: refresh the package index and install Node.js and Git with
//!   `pkg` when absent. Every command is best effort.
//! - Windows: never installs anything; Node.js and npm must already be
//!   present, otherwise the user gets manual instructions.
//! - Other: warn that the platform is untested and require Node.js.

use crate::environment::{os_name, Platform};
use crate::error::{DevbootError, Result};
use crate::requirements::probe::{self, Tool, GIT, NODE, NPM};
use crate::runner::step::{run_step, CommandRunner};
use crate::shell::{execute, CommandOptions, CommandResult};
use crate::ui::UserInterface;

/// Download page shown when Node.js has to be installed by hand.
pub const NODE_DOWNLOAD_URL: &str = "https://nodejs.org/";

/// Mockable dependencies for the provisioner.
pub struct ProvisionContext<'a> {
    /// Check whether a tool answers `--version`.
    pub tool_present: &'a dyn Fn(&str) -> bool,
    /// Read a tool's version for display.
    pub tool_version: &'a dyn Fn(&str) -> Option<String>,
    /// Run a shell command.
    pub run_command: CommandRunner<'a>,
}

fn run_captured(command: &str) -> Result<CommandResult> {
    execute(command, &CommandOptions::default())
}

/// Build the default `ProvisionContext` for production use.
pub fn default_context() -> ProvisionContext<'static> {
    ProvisionContext {
        tool_present: &probe::tool_present,
        tool_version: &probe::tool_version,
        run_command: &run_captured,
    }
}

/// Make sure the tools needed to run the project are available.
///
/// Returns `Ok(())` when setup can continue and `RequirementMissing`
/// when it must stop.
pub fn provision(
    platform: Platform,
    ui: &mut dyn UserInterface,
    ctx: &ProvisionContext<'_>,
) -> Result<()> {
    tracing::debug!("Provisioning for platform {}", platform);
    match platform {
        Platform::Termux => provision_termux(ui, ctx),
        Platform::Windows => provision_windows(ui, ctx),
        Platform::Other => provision_other(ui, ctx),
    }
}

fn provision_termux(ui: &mut dyn UserInterface, ctx: &ProvisionContext<'_>) -> Result<()> {
    ui.show_header("Detected Termux environment");

    ui.message("Updating package list...");
    best_effort("pkg update -y", ui, ctx);

    for tool in [NODE, GIT] {
        if (ctx.tool_present)(tool.command) {
            ui.success(&format!("{} already installed", tool.display_name));
        } else {
            ui.message(&format!("Installing {}...", tool.display_name));
            best_effort(&format!("pkg install -y {}", tool.termux_package), ui, ctx);
        }
    }

    Ok(())
}

/// A failed Termux package command is a warning, not a stop.
fn best_effort(command: &str, ui: &mut dyn UserInterface, ctx: &ProvisionContext<'_>) {
    let succeeded = run_step(command, ui, ctx.run_command)
        .map(|r| r.success)
        .unwrap_or(false);
    if !succeeded {
        ui.warning(&format!("'{}' failed; continuing anyway", command));
    }
}

fn provision_windows(ui: &mut dyn UserInterface, ctx: &ProvisionContext<'_>) -> Result<()> {
    ui.show_header("Detected Windows environment");

    require_tool(
        NODE,
        ui,
        ctx,
        &[
            &format!("Please install Node.js from: {}", NODE_DOWNLOAD_URL),
            "After installation, run devboot again.",
        ],
    )?;
    require_tool(
        NPM,
        ui,
        ctx,
        &["npm should come with Node.js. Please reinstall Node.js."],
    )?;

    Ok(())
}

fn require_tool(
    tool: Tool,
    ui: &mut dyn UserInterface,
    ctx: &ProvisionContext<'_>,
    hints: &[&str],
) -> Result<()> {
    if !(ctx.tool_present)(tool.command) {
        ui.error(&format!("{} is not installed!", tool.display_name));
        for hint in hints {
            ui.show_hint(hint);
        }
        return Err(DevbootError::RequirementMissing {
            requirement: tool.command.to_string(),
            message: format!("{} must be installed manually", tool.display_name),
        });
    }

    ui.success(&format!("{} already installed", tool.display_name));
    if let Some(version) = (ctx.tool_version)(tool.command) {
        ui.message(&format!("  {} {}", tool.command, version));
    }
    Ok(())
}

fn provision_other(ui: &mut dyn UserInterface, ctx: &ProvisionContext<'_>) -> Result<()> {
    ui.warning(&format!("Detected platform: {}", os_name()));
    ui.message("devboot is optimized for Windows and Termux.");
    ui.message("Attempting to continue anyway...");

    if !(ctx.tool_present)(NODE.command) {
        ui.error("Node.js is required but not found!");
        ui.show_hint("Please install Node.js and try again.");
        return Err(DevbootError::RequirementMissing {
            requirement: NODE.command.to_string(),
            message: "Node.js is required but not found".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::cell::RefCell;
    use std::time::Duration;

    /// Records every command and answers with a fixed outcome.
    struct Recorder {
        commands: RefCell<Vec<String>>,
        succeed: bool,
    }

    impl Recorder {
        fn new(succeed: bool) -> Self {
            Self {
                commands: RefCell::new(Vec::new()),
                succeed,
            }
        }

        fn run(&self, cmd: &str) -> Result<CommandResult> {
            self.commands.borrow_mut().push(cmd.to_string());
            if self.succeed {
                Ok(CommandResult::success(
                    String::new(),
                    String::new(),
                    Duration::ZERO,
                ))
            } else {
                Ok(CommandResult::failure(
                    Some(100),
                    String::new(),
                    "E: Unable to locate package".to_string(),
                    Duration::ZERO,
                ))
            }
        }

        fn commands(&self) -> Vec<String> {
            self.commands.borrow().clone()
        }
    }

    fn provision_with(
        platform: Platform,
        present: &[&str],
        recorder: &Recorder,
        ui: &mut MockUI,
    ) -> Result<()> {
        let present: Vec<String> = present.iter().map(|s| s.to_string()).collect();
        let tool_present = move |name: &str| present.iter().any(|p| p == name);
        let tool_version = |_: &str| Some("20.11.1".to_string());
        let run = |cmd: &str| recorder.run(cmd);
        let ctx = ProvisionContext {
            tool_present: &tool_present,
            tool_version: &tool_version,
            run_command: &run,
        };
        provision(platform, ui, &ctx)
    }

    #[test]
    fn termux_installs_missing_tools() {
        let recorder = Recorder::new(true);
        let mut ui = MockUI::new();
        provision_with(Platform::Termux, &[], &recorder, &mut ui).unwrap();

        assert_eq!(
            recorder.commands(),
            vec![
                "pkg update -y".to_string(),
                "pkg install -y nodejs".to_string(),
                "pkg install -y git".to_string(),
            ]
        );
        assert!(ui.has_message("Installing Node.js..."));
    }

    #[test]
    fn termux_skips_node_install_when_present() {
        let recorder = Recorder::new(true);
        let mut ui = MockUI::new();
        provision_with(Platform::Termux, &["node"], &recorder, &mut ui).unwrap();

        let commands = recorder.commands();
        assert!(!commands.iter().any(|c| c.contains("nodejs")));
        assert!(commands.contains(&"pkg install -y git".to_string()));
        assert!(ui.has_success("Node.js already installed"));
    }

    #[test]
    fn termux_with_everything_present_only_updates() {
        let recorder = Recorder::new(true);
        let mut ui = MockUI::new();
        provision_with(Platform::Termux, &["node", "git"], &recorder, &mut ui).unwrap();

        assert_eq!(recorder.commands(), vec!["pkg update -y".to_string()]);
        assert!(ui.has_success("Git already installed"));
    }

    #[test]
    fn termux_install_failures_are_soft() {
        let recorder = Recorder::new(false);
        let mut ui = MockUI::new();
        let result = provision_with(Platform::Termux, &[], &recorder, &mut ui);

        assert!(result.is_ok());
        assert_eq!(recorder.commands().len(), 3);
        assert_eq!(ui.warnings().len(), 3);
        assert!(ui.has_warning("pkg install -y git"));
        assert!(ui
            .error_blocks()
            .iter()
            .all(|(_, _, stderr)| stderr.contains("Unable to locate package")));
    }

    #[test]
    fn windows_missing_everything_fails_without_installing() {
        let recorder = Recorder::new(true);
        let mut ui = MockUI::new();
        let err = provision_with(Platform::Windows, &[], &recorder, &mut ui).unwrap_err();

        assert!(matches!(
            err,
            DevbootError::RequirementMissing { ref requirement, .. } if requirement == "node"
        ));
        assert!(recorder.commands().is_empty());
        assert!(ui.has_error("Node.js is not installed!"));
        assert!(ui.has_hint(NODE_DOWNLOAD_URL));
    }

    #[test]
    fn windows_missing_npm_fails() {
        let recorder = Recorder::new(true);
        let mut ui = MockUI::new();
        let err = provision_with(Platform::Windows, &["node"], &recorder, &mut ui).unwrap_err();

        assert!(matches!(
            err,
            DevbootError::RequirementMissing { ref requirement, .. } if requirement == "npm"
        ));
        assert!(recorder.commands().is_empty());
        assert!(ui.has_hint("reinstall Node.js"));
    }

    #[test]
    fn windows_with_tools_shows_versions() {
        let recorder = Recorder::new(true);
        let mut ui = MockUI::new();
        provision_with(Platform::Windows, &["node", "npm"], &recorder, &mut ui).unwrap();

        assert!(ui.has_success("Node.js already installed"));
        assert!(ui.has_success("npm already installed"));
        assert!(ui.has_message("node 20.11.1"));
        assert!(recorder.commands().is_empty());
    }

    #[test]
    fn other_platform_requires_node() {
        let recorder = Recorder::new(true);
        let mut ui = MockUI::new();
        let err = provision_with(Platform::Other, &["git"], &recorder, &mut ui).unwrap_err();

        assert!(matches!(err, DevbootError::RequirementMissing { .. }));
        assert!(ui.has_warning("Detected platform"));
        assert!(ui.has_error("Node.js is required but not found!"));
    }

    #[test]
    fn other_platform_with_node_continues() {
        let recorder = Recorder::new(true);
        let mut ui = MockUI::new();
        provision_with(Platform::Other, &["node"], &recorder, &mut ui).unwrap();

        assert!(ui.has_message("Attempting to continue anyway..."));
        assert!(recorder.commands().is_empty());
    }
}
