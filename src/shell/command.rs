//! Running project and package commands through the user's shell.
//!
//! Commands go through a login shell so Node.js installed with nvm, volta
//! or mise resolves the same way it does in the user's terminal. There are
//! two ways to run one:
//!
//! - [`execute`] collects stdout and stderr for `pkg` and `npm install`,
//!   whose output is only shown on failure or with `--verbose`.
//! - [`execute_attached`] hands the terminal to the child. The dev server
//!   reads keyboard shortcuts and prompts from stdin, so nothing is redirected.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

use crate::error::{DevbootError, Result};

/// How a finished command ended.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code, `None` when the process died from a signal.
    pub exit_code: Option<i32>,
    /// Signal that ended the process (Unix only).
    pub signal: Option<i32>,
    /// Captured stdout; empty for attached runs.
    pub stdout: String,
    /// Captured stderr; empty for attached runs.
    pub stderr: String,
    pub duration: Duration,
    pub success: bool,
}

impl CommandResult {
    /// A run that exited with status 0.
    pub fn success(stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            signal: None,
            stdout,
            stderr,
            duration,
            success: true,
        }
    }

    /// A run that exited with a non-zero status.
    pub fn failure(
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        duration: Duration,
    ) -> Self {
        Self {
            exit_code,
            signal: None,
            stdout,
            stderr,
            duration,
            success: false,
        }
    }

    /// Mark the run as ended by `signal` rather than by exiting.
    pub fn with_signal(mut self, signal: i32) -> Self {
        self.exit_code = None;
        self.signal = Some(signal);
        self.success = false;
        self
    }

    /// Short description of the exit status, e.g. `exit code 1` or `signal 9`.
    pub fn status_label(&self) -> String {
        match (self.exit_code, self.signal) {
            (Some(code), _) => format!("exit code {}", code),
            (None, Some(signal)) => format!("signal {}", signal),
            (None, None) => "unknown status".to_string(),
        }
    }

    fn from_status(status: ExitStatus, stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: status.code(),
            signal: terminating_signal(&status),
            stdout,
            stderr,
            duration,
            success: status.success(),
        }
    }
}

#[cfg(unix)]
fn terminating_signal(status: &ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;
    status.signal()
}

#[cfg(not(unix))]
fn terminating_signal(_status: &ExitStatus) -> Option<i32> {
    None
}

/// Where and with what environment a command runs.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Working directory; the current one when `None`.
    pub cwd: Option<PathBuf>,
    /// Variables layered over the inherited environment.
    pub env: HashMap<String, String>,
}

impl CommandOptions {
    /// Run in `dir` with the inherited environment.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            cwd: Some(dir.to_path_buf()),
            env: HashMap::new(),
        }
    }
}

/// Run `command` with stdin closed and both output streams captured.
pub fn execute(command: &str, options: &CommandOptions) -> Result<CommandResult> {
    let start = Instant::now();
    let output = shell_command(command, options)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|e| spawn_failed(command, e))?;

    let result = CommandResult::from_status(
        output.status,
        String::from_utf8_lossy(&output.stdout).into_owned(),
        String::from_utf8_lossy(&output.stderr).into_owned(),
        start.elapsed(),
    );
    tracing::debug!(
        "`{}` finished with {} in {:?}",
        command,
        result.status_label(),
        result.duration
    );
    Ok(result)
}

/// Run `command` on the current terminal and block until it exits.
///
/// stdin, stdout and stderr are all inherited; nothing is captured.
pub fn execute_attached(command: &str, options: &CommandOptions) -> Result<CommandResult> {
    let start = Instant::now();
    let status = shell_command(command, options)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|e| spawn_failed(command, e))?;

    let result = CommandResult::from_status(status, String::new(), String::new(), start.elapsed());
    tracing::debug!(
        "Attached `{}` ended with {} after {:?}",
        command,
        result.status_label(),
        result.duration
    );
    Ok(result)
}

fn shell_command(command: &str, options: &CommandOptions) -> Command {
    let shell = detect_shell();
    let flag = shell_flag(super::is_ci());
    tracing::debug!("Spawning `{}` via {} {}", command, shell, flag);

    let mut cmd = Command::new(shell);
    cmd.arg(flag).arg(command).envs(&options.env);
    if let Some(cwd) = &options.cwd {
        cmd.current_dir(cwd);
    }
    cmd
}

fn spawn_failed(command: &str, e: std::io::Error) -> DevbootError {
    tracing::warn!("Failed to spawn `{}`: {}", command, e);
    DevbootError::CommandFailed {
        command: command.to_string(),
        code: None,
    }
}

fn detect_shell() -> String {
    if cfg!(windows) {
        std::env::var("COMSPEC").unwrap_or_else(|_| "cmd.exe".to_string())
    } else {
        std::env::var("SHELL").unwrap_or_else(|_| "/bin/sh".to_string())
    }
}

/// `-lic` loads the profile that puts nvm/volta/mise shims on PATH. Without a
/// TTY (CI) the interactive flag makes bash complain about job control.
fn shell_flag(ci: bool) -> &'static str {
    if cfg!(windows) {
        "/C"
    } else if ci {
        "-lc"
    } else {
        "-lic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn captured_run_collects_stdout() {
        let result = execute("echo hello", &CommandOptions::default()).unwrap();

        assert!(result.success);
        assert_eq!(result.exit_code, Some(0));
        assert_eq!(result.signal, None);
        assert!(result.stdout.contains("hello"));
    }

    #[test]
    fn captured_run_reports_exit_code() {
        let result = execute("exit 3", &CommandOptions::default()).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, Some(3));
        assert_eq!(result.status_label(), "exit code 3");
    }

    #[test]
    fn captured_run_collects_stderr() {
        let cmd = if cfg!(windows) {
            "echo oops 1>&2"
        } else {
            "echo oops >&2"
        };
        let result = execute(cmd, &CommandOptions::default()).unwrap();
        assert!(result.stderr.contains("oops"));
    }

    #[test]
    fn env_overlay_reaches_child_only() {
        let mut options = CommandOptions::default();
        options
            .env
            .insert("DEVBOOT_TEST_VAR".to_string(), "child_only".to_string());
        let cmd = if cfg!(windows) {
            "echo %DEVBOOT_TEST_VAR%"
        } else {
            "echo $DEVBOOT_TEST_VAR"
        };

        let result = execute(cmd, &options).unwrap();

        assert!(result.stdout.contains("child_only"));
        assert!(std::env::var("DEVBOOT_TEST_VAR").is_err());
    }

    #[test]
    fn in_dir_sets_working_directory() {
        let temp = TempDir::new().unwrap();
        let cmd = if cfg!(windows) {
            "echo marker > here.txt"
        } else {
            "touch here.txt"
        };

        let result = execute(cmd, &CommandOptions::in_dir(temp.path())).unwrap();

        assert!(result.success);
        assert!(temp.path().join("here.txt").exists());
    }

    #[cfg(unix)]
    #[test]
    fn death_by_signal_keeps_signal_number() {
        let result = execute("kill -KILL $$", &CommandOptions::default()).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, None);
        assert_eq!(result.signal, Some(9));
        assert_eq!(result.status_label(), "signal 9");
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn attached_run_shares_stdin_with_parent() {
        let temp = TempDir::new().unwrap();
        let ours = std::fs::read_link("/proc/self/fd/0").unwrap();

        let result = execute_attached(
            "readlink /proc/self/fd/0 > stdin.txt",
            &CommandOptions::in_dir(temp.path()),
        )
        .unwrap();

        assert!(result.success);
        assert!(result.stdout.is_empty());
        let theirs = std::fs::read_to_string(temp.path().join("stdin.txt")).unwrap();
        assert_eq!(theirs.trim_end(), ours.to_string_lossy());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn captured_run_closes_stdin() {
        let temp = TempDir::new().unwrap();

        execute(
            "readlink /proc/self/fd/0 > stdin.txt",
            &CommandOptions::in_dir(temp.path()),
        )
        .unwrap();

        let theirs = std::fs::read_to_string(temp.path().join("stdin.txt")).unwrap();
        assert_eq!(theirs.trim_end(), "/dev/null");
    }

    #[test]
    fn attached_run_reports_exit_code() {
        let result = execute_attached("exit 4", &CommandOptions::default()).unwrap();
        assert_eq!(result.exit_code, Some(4));
        assert!(!result.success);
    }

    #[test]
    fn with_signal_clears_exit_code() {
        let result =
            CommandResult::success(String::new(), String::new(), Duration::ZERO).with_signal(2);
        assert!(!result.success);
        assert_eq!(result.exit_code, None);
        assert_eq!(result.signal, Some(2));
    }

    #[cfg(not(windows))]
    #[test]
    fn ci_drops_interactive_flag() {
        assert_eq!(shell_flag(true), "-lc");
        assert_eq!(shell_flag(false), "-lic");
    }
}
