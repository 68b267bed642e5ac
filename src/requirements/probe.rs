//! Tool presence probing.
//!
//! A tool counts as present when `<tool> --version` can be spawned and
//! exits 0. The probe spawns the binary directly (no shell) and discards
//! its output; nothing is cached, so every call re-checks the host.

use regex::Regex;
use serde::Serialize;
use std::io;
use std::process::{Command, Output, Stdio};

/// An external tool devboot depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tool {
    /// Executable name looked up on PATH.
    pub command: &'static str,
    /// Name shown to the user.
    pub display_name: &'static str,
    /// Package providing the tool in Termux's `pkg`.
    #[serde(skip)]
    pub termux_package: &'static str,
}

/// The JavaScript runtime.
pub const NODE: Tool = Tool {
    command: "node",
    display_name: "Node.js",
    termux_package: "nodejs",
};

/// The runtime's package manager (bundled with Node.js).
pub const NPM: Tool = Tool {
    command: "npm",
    display_name: "npm",
    termux_package: "nodejs",
};

/// Version control.
pub const GIT: Tool = Tool {
    command: "git",
    display_name: "Git",
    termux_package: "git",
};

/// Every tool devboot reports on.
pub const ALL_TOOLS: &[Tool] = &[NODE, NPM, GIT];

/// Check whether `name --version` runs and exits successfully.
///
/// Returns `false` (never panics) when the command is missing or fails.
pub fn tool_present(name: &str) -> bool {
    let present = version_output(name, false)
        .map(|output| output.status.success())
        .unwrap_or(false);
    tracing::debug!("Tool '{}' present: {}", name, present);
    present
}

/// Get the version reported by `name --version`, if it runs.
pub fn tool_version(name: &str) -> Option<String> {
    let output = version_output(name, true).ok()?;
    if !output.status.success() {
        return None;
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    extract_version(&stdout).or_else(|| {
        stdout
            .lines()
            .next()
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty())
    })
}

/// Spawn `name --version`.
///
/// On Windows, npm and friends ship as `.cmd` shims that `CreateProcess`
/// won't resolve from the bare name, so the shim is tried second.
fn version_output(name: &str, capture: bool) -> io::Result<Output> {
    let run = |program: &str| {
        let stdout = if capture {
            Stdio::piped()
        } else {
            Stdio::null()
        };
        Command::new(program)
            .arg("--version")
            .stdin(Stdio::null())
            .stdout(stdout)
            .stderr(Stdio::null())
            .output()
    };

    match run(name) {
        Err(e) if cfg!(target_os = "windows") && e.kind() == io::ErrorKind::NotFound => {
            run(&format!("{}.cmd", name))
        }
        other => other,
    }
}

/// Extract version from command output.
pub fn extract_version(output: &str) -> Option<String> {
    let patterns = [r"(\d+\.\d+\.\d+)", r"version\s+(\d+\.\d+)", r"v(\d+\.\d+)"];

    for pattern in &patterns {
        if let Ok(re) = Regex::new(pattern) {
            if let Some(caps) = re.captures(output) {
                if let Some(m) = caps.get(1) {
                    return Some(m.as_str().to_string());
                }
            }
        }
    }

    None
}
