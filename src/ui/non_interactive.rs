//! Plain output for CI, pipes and `--non-interactive`.

use super::{DevbootTheme, OutputMode, SpinnerHandle, UserInterface};
use crate::shell::CommandResult;

/// Uncolored line-per-event output without animation.
///
/// Warnings and errors go to stderr so piped stdout stays clean.
pub struct NonInteractiveUI {
    mode: OutputMode,
    theme: DevbootTheme,
}

impl NonInteractiveUI {
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            theme: DevbootTheme::plain(),
        }
    }
}

impl UserInterface for NonInteractiveUI {
    fn message(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_progress() {
            println!("{}", self.theme.format_success(msg));
        }
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_warning(msg));
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }

    fn show_hint(&mut self, hint: &str) {
        println!("  {}", hint);
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_progress() {
            println!("\n{}\n", self.theme.format_header(title));
        }
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_progress() {
            println!("{}", message);
        }
        Box::new(LineSpinner {
            mode: self.mode,
            theme: self.theme.clone(),
        })
    }

    fn command_output(&mut self, output: &str) {
        if self.mode.shows_command_output() && !output.trim().is_empty() {
            println!("{}", output.trim_end());
        }
    }

    fn show_error_block(&mut self, command: &str, result: &CommandResult) {
        eprintln!(
            "{}",
            self.theme
                .format_error_block(command, &result.status_label(), &result.stderr)
        );
    }
}

/// Prints only the outcome line once the operation finishes.
struct LineSpinner {
    mode: OutputMode,
    theme: DevbootTheme,
}

impl SpinnerHandle for LineSpinner {
    fn finish_success(&mut self, msg: &str) {
        if self.mode.shows_progress() {
            println!("{}", self.theme.format_success(msg));
        }
    }

    fn finish_error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }
}
