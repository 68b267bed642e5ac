//! Styled output for a user sitting at a terminal.

use console::Term;
use std::io::Write;

use super::{
    should_use_colors, DevbootTheme, NonInteractiveUI, OutputMode, ProgressSpinner,
    SpinnerHandle, UserInterface,
};
use crate::shell::CommandResult;

/// Colored output with animated spinners.
///
/// Progress goes to stdout; warnings, errors and failed-command blocks go
/// to stderr so they survive `devboot | tee log` with the status intact.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: DevbootTheme,
    mode: OutputMode,
}

impl TerminalUI {
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            DevbootTheme::new()
        } else {
            DevbootTheme::plain()
        };
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
            mode,
        }
    }

    fn progress(&mut self, line: String) {
        if self.mode.shows_progress() {
            writeln!(self.out, "{}", line).ok();
        }
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        writeln!(self.out, "{}", msg).ok();
    }

    fn success(&mut self, msg: &str) {
        let line = self.theme.format_success(msg);
        self.progress(line);
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_hint(&mut self, hint: &str) {
        writeln!(self.out, "  {}", self.theme.hint.apply_to(hint)).ok();
    }

    fn show_header(&mut self, title: &str) {
        let banner = format!("\n{}\n", self.theme.format_header(title));
        self.progress(banner);
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_progress() {
            Box::new(ProgressSpinner::new(message))
        } else {
            Box::new(ProgressSpinner::hidden())
        }
    }

    fn command_output(&mut self, output: &str) {
        if !self.mode.shows_command_output() {
            return;
        }
        for line in output.lines().filter(|l| !l.trim().is_empty()) {
            writeln!(self.out, "    {}", self.theme.dim.apply_to(line)).ok();
        }
    }

    fn show_error_block(&mut self, command: &str, result: &CommandResult) {
        let block = self
            .theme
            .format_error_block(command, &result.status_label(), &result.stderr);
        writeln!(self.err, "{}", block).ok();
    }
}

/// Styled UI when a user is watching a TTY, plain text otherwise.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if interactive && Term::stdout().is_term() {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}
