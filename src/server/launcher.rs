//! Development server launch.

use std::collections::HashMap;
use std::path::Path;

use crate::config::Settings;
use crate::error::Result;
use crate::server::interrupt;
use crate::server::network::local_ip_via;
use crate::shell::{CommandOptions, CommandResult};
use crate::ui::UserInterface;

/// Runs the dev server attached to the terminal, blocking until it exits.
pub type ServerRunner<'a> = &'a dyn Fn(&str, &CommandOptions) -> Result<CommandResult>;

/// How the dev server run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// Stopped with Ctrl+C.
    Interrupted,
    /// The server process ended without being interrupted.
    Exited(Option<i32>),
}

/// URLs the dev server is reachable at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerUrls {
    pub local: String,
    pub network: String,
}

impl ServerUrls {
    pub fn new(ip: &str, port: u16) -> Self {
        Self {
            local: format!("http://localhost:{}", port),
            network: format!("http://{}:{}", ip, port),
        }
    }
}

/// Variables layered over the inherited environment for the server process.
pub fn server_env(settings: &Settings) -> HashMap<String, String> {
    HashMap::from([
        ("NODE_ENV".to_string(), settings.node_env.clone()),
        ("PORT".to_string(), settings.port.to_string()),
    ])
}

/// Print where the server will be reachable.
pub fn announce(ui: &mut dyn UserInterface, urls: &ServerUrls) {
    ui.message("Server will be available at:");
    ui.message(&format!("  Local:   {}", urls.local));
    ui.message(&format!("  Network: {}", urls.network));
    ui.message("");
    ui.message(&format!("On your phone, open: {}", urls.network));
    ui.warning("Make sure your phone is on the same WiFi network!");
    ui.message("Press Ctrl+C to stop the server");
}

/// Start the dev server in `project_root` and wait for it.
///
/// `run` is expected to leave stdio attached so the server's output and
/// prompts use the terminal. Ctrl+C is treated as a normal way to stop.
pub fn launch(
    project_root: &Path,
    settings: &Settings,
    ui: &mut dyn UserInterface,
    run: ServerRunner<'_>,
) -> Result<LaunchOutcome> {
    ui.show_header("Starting development server...");

    let ip = local_ip_via(&settings.probe_address);
    tracing::debug!("Local address resolved to {}", ip);
    announce(ui, &ServerUrls::new(&ip, settings.port));

    let options = CommandOptions {
        env: server_env(settings),
        ..CommandOptions::in_dir(project_root)
    };

    interrupt::install_handler();
    tracing::debug!("Starting `{}` on port {}", settings.dev_command, settings.port);
    let result = run(&settings.dev_command, &options)?;

    if interrupt::interrupted() || interrupt::is_interrupt_exit(&result) {
        tracing::debug!("Dev server interrupted");
        ui.message("Server stopped.");
        return Ok(LaunchOutcome::Interrupted);
    }

    if !result.success {
        ui.warning(&format!(
            "`{}` stopped unexpectedly ({})",
            settings.dev_command,
            result.status_label()
        ));
    } else {
        ui.message("Dev server exited.");
    }
    Ok(LaunchOutcome::Exited(result.exit_code))
}
