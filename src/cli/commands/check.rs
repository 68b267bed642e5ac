//! Check command implementation.
//!
//! `devboot check` reports what `run` would find (platform, tools,
//! manifest) without installing or starting anything.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::cli::args::CheckArgs;
use crate::config::Settings;
use crate::environment::{detect_platform, os_name, Platform};
use crate::error::Result;
use crate::project::manifest_present;
use crate::requirements::probe::{self, Tool, ALL_TOOLS, NODE, NPM};
use crate::server::local_ip_via;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::run::{load_config_or_report, CONFIG_ERROR_EXIT};

/// Presence of a single tool.
#[derive(Debug, Clone, Serialize)]
pub struct ToolStatus {
    pub name: String,
    pub display_name: String,
    pub present: bool,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Everything `check` found.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub platform: Platform,
    pub os: String,
    pub tools: Vec<ToolStatus>,
    pub manifest: String,
    pub manifest_present: bool,
    pub local_ip: String,
}

impl CheckReport {
    /// Whether `run` could get past provisioning and the manifest check.
    pub fn ready(&self) -> bool {
        self.manifest_present && self.tools.iter().all(|t| t.present || !t.required)
    }
}

/// Tools `run` cannot do without. Git is only installed opportunistically on Termux.
fn is_required(tool: &Tool) -> bool {
    tool.command == NODE.command || tool.command == NPM.command
}

/// Assemble a report from injected probes.
pub fn build_report(
    project_root: &Path,
    settings: &Settings,
    platform: Platform,
    tool_present: &dyn Fn(&str) -> bool,
    tool_version: &dyn Fn(&str) -> Option<String>,
) -> CheckReport {
    let tools = ALL_TOOLS
        .iter()
        .map(|tool| {
            let present = tool_present(tool.command);
            ToolStatus {
                name: tool.command.to_string(),
                display_name: tool.display_name.to_string(),
                present,
                required: is_required(tool),
                version: if present {
                    tool_version(tool.command)
                } else {
                    None
                },
            }
        })
        .collect();

    CheckReport {
        platform,
        os: os_name().to_string(),
        tools,
        manifest: settings.manifest.clone(),
        manifest_present: manifest_present(project_root, settings),
        local_ip: local_ip_via(&settings.probe_address),
    }
}

fn render(report: &CheckReport, ui: &mut dyn UserInterface) {
    ui.show_header("devboot check");
    ui.message(&format!("Platform: {} ({})", report.platform, report.os));

    for tool in &report.tools {
        match (tool.present, &tool.version) {
            (true, Some(version)) => {
                ui.success(&format!("{} {}", tool.display_name, version));
            }
            (true, None) => ui.success(&tool.display_name),
            (false, _) if tool.required => {
                ui.error(&format!("{} not found", tool.display_name));
            }
            (false, _) => ui.warning(&format!("{} not found (optional)", tool.display_name)),
        }
    }

    if report.manifest_present {
        ui.success(&format!("{} found", report.manifest));
    } else {
        ui.error(&format!("{} not found", report.manifest));
    }

    ui.message(&format!("Local IP: {}", report.local_ip));
}

/// The check command implementation.
pub struct CheckCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(project_root: &Path, config_path: Option<&Path>, args: CheckArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            args,
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(config) =
            load_config_or_report(&self.project_root, self.config_path.as_deref(), ui)
        else {
            return Ok(CommandResult::failure(CONFIG_ERROR_EXIT));
        };

        let report = build_report(
            &self.project_root,
            &config.settings,
            detect_platform(),
            &probe::tool_present,
            &probe::tool_version,
        );

        if self.args.json {
            let json = serde_json::to_string_pretty(&report).map_err(anyhow::Error::from)?;
            println!("{}", json);
        } else {
            render(&report, ui);
        }

        if report.ready() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}
