//! Setup workflow orchestration.
//!
//! detect platform → provision tools → install dependencies → launch server.
//! Every stage before the launch is a hard stop on failure; nothing is retried.

use std::path::Path;
use std::time::{Duration, Instant};

use crate::config::{DevbootConfig, Settings};
use crate::environment::Platform;
use crate::error::Result;
use crate::project::install_dependencies;
use crate::requirements::installer::{provision, ProvisionContext};
use crate::server::{launch, LaunchOutcome, ServerRunner};
use crate::ui::UserInterface;

use super::step::CommandRunner;

/// Stage at which a workflow stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Provision,
    Install,
    Launch,
}

/// Options for running the workflow.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Port override from the command line or `DEVBOOT_PORT`.
    pub port: Option<u16>,
    /// Stop after dependencies are installed.
    pub no_server: bool,
}

/// Injected side effects, so the whole pipeline can run against fakes.
pub struct WorkflowContext<'a> {
    /// Platform detection.
    pub detect_platform: &'a dyn Fn() -> Platform,
    /// Tool probes and package commands for provisioning.
    pub provision: ProvisionContext<'a>,
    /// Runs the dependency install command in the project root.
    pub run_install: CommandRunner<'a>,
    /// Runs the dev server.
    pub run_server: ServerRunner<'a>,
}

/// Result of running the workflow.
#[derive(Debug)]
pub struct WorkflowResult {
    /// Detected platform.
    pub platform: Platform,
    /// Stage that failed, if any.
    pub failed_stage: Option<Stage>,
    /// How the dev server ended, if it was launched.
    pub launch: Option<LaunchOutcome>,
    /// Total duration.
    pub duration: Duration,
}

impl WorkflowResult {
    /// Whether setup completed.
    pub fn success(&self) -> bool {
        self.failed_stage.is_none()
    }

    /// Process exit code for this result.
    ///
    /// A server that exits by itself, or is interrupted, still counts as success.
    pub fn exit_code(&self) -> i32 {
        if self.success() {
            0
        } else {
            1
        }
    }
}

/// Orchestrates a full local setup.
pub struct Workflow<'a> {
    project_root: &'a Path,
    config: &'a DevbootConfig,
    options: RunOptions,
}

impl<'a> Workflow<'a> {
    pub fn new(project_root: &'a Path, config: &'a DevbootConfig, options: RunOptions) -> Self {
        Self {
            project_root,
            config,
            options,
        }
    }

    /// Settings with command-line overrides applied.
    pub fn settings(&self) -> Settings {
        let mut settings = self.config.settings.clone();
        if let Some(port) = self.options.port {
            settings.port = port;
        }
        settings
    }

    /// Run the workflow to completion.
    ///
    /// Stage failures are reported through `ui` and reflected in the
    /// result; `Err` is reserved for failures outside the pipeline.
    pub fn run(
        &self,
        ui: &mut dyn UserInterface,
        ctx: &WorkflowContext<'_>,
    ) -> Result<WorkflowResult> {
        let start = Instant::now();
        let settings = self.settings();

        ui.show_header(&format!("{} - Local Setup", self.config.display_name()));

        let platform = (ctx.detect_platform)();
        tracing::debug!("Detected platform: {}", platform);

        let finish = |failed_stage: Option<Stage>, launch: Option<LaunchOutcome>| WorkflowResult {
            platform,
            failed_stage,
            launch,
            duration: start.elapsed(),
        };

        if let Err(e) = provision(platform, ui, &ctx.provision) {
            tracing::debug!("Provisioning failed: {}", e);
            ui.error("Setup stopped: required tools are missing.");
            return Ok(finish(Some(Stage::Provision), None));
        }

        if let Err(e) = install_dependencies(self.project_root, &settings, ui, ctx.run_install) {
            tracing::debug!("Dependency install failed: {}", e);
            ui.error("Failed to install dependencies!");
            return Ok(finish(Some(Stage::Install), None));
        }

        ui.success("Setup complete!");

        if self.options.no_server {
            ui.message(&format!(
                "Skipping dev server. Start it later with `{}`.",
                settings.dev_command
            ));
            return Ok(finish(None, None));
        }

        match launch(self.project_root, &settings, ui, ctx.run_server) {
            Ok(outcome) => Ok(finish(None, Some(outcome))),
            Err(e) => {
                tracing::debug!("Dev server failed to start: {}", e);
                ui.error("Failed to start the development server!");
                Ok(finish(Some(Stage::Launch), None))
            }
        }
    }
}
