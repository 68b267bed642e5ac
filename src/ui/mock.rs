//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use devboot::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//!
//! // Use ui in code under test...
//! ui.message("Starting setup");
//! ui.success("Done!");
//!
//! // Assert on captured interactions
//! assert!(ui.messages().contains(&"Starting setup".to_string()));
//! assert!(ui.successes().contains(&"Done!".to_string()));
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use super::{SpinnerHandle, UserInterface};
use crate::shell::CommandResult;

/// Shared, ordered record of plain messages.
pub type MessageLog = Rc<RefCell<Vec<String>>>;

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    messages: MessageLog,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    hints: Vec<String>,
    spinners: Vec<String>,
    command_outputs: Vec<String>,
    error_blocks: Vec<(String, String, String)>,
    spinner_results: Rc<RefCell<Vec<(bool, String)>>>,
}

impl MockUI {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all captured messages.
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    /// Handle on the message log that stays readable while the UI is
    /// mutably borrowed, e.g. from inside an injected command runner.
    pub fn message_log(&self) -> MessageLog {
        Rc::clone(&self.messages)
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get all captured hints.
    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    /// Get all spinner messages that were started.
    pub fn spinners(&self) -> &[String] {
        &self.spinners
    }

    /// Get all captured command output.
    pub fn command_outputs(&self) -> &[String] {
        &self.command_outputs
    }

    /// Get all captured error blocks as (command, status label, stderr).
    pub fn error_blocks(&self) -> &[(String, String, String)] {
        &self.error_blocks
    }

    /// Get spinner outcomes as (succeeded, final message).
    pub fn spinner_results(&self) -> Vec<(bool, String)> {
        self.spinner_results.borrow().clone()
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.borrow().iter().any(|m| m.contains(msg))
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific warning was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific hint was shown.
    pub fn has_hint(&self, msg: &str) -> bool {
        self.hints.iter().any(|m| m.contains(msg))
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        self.messages.borrow_mut().push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn show_hint(&mut self, hint: &str) {
        self.hints.push(hint.to_string());
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinners.push(message.to_string());
        Box::new(MockSpinner {
            results: Rc::clone(&self.spinner_results),
        })
    }

    fn command_output(&mut self, output: &str) {
        self.command_outputs.push(output.to_string());
    }

    fn show_error_block(&mut self, command: &str, result: &CommandResult) {
        self.error_blocks.push((
            command.to_string(),
            result.status_label(),
            result.stderr.clone(),
        ));
    }
}

/// Mock spinner that records how it finished.
#[derive(Debug, Default)]
pub struct MockSpinner {
    results: Rc<RefCell<Vec<(bool, String)>>>,
}

impl SpinnerHandle for MockSpinner {
    fn finish_success(&mut self, msg: &str) {
        self.results.borrow_mut().push((true, msg.to_string()));
    }

    fn finish_error(&mut self, msg: &str) {
        self.results.borrow_mut().push((false, msg.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_captures_all_channels() {
        let mut ui = MockUI::new();
        ui.message("msg");
        ui.success("ok");
        ui.warning("careful");
        ui.error("bad");
        ui.show_hint("try this");
        ui.show_header("Title");

        assert!(ui.has_message("msg"));
        assert!(ui.has_success("ok"));
        assert!(ui.has_warning("careful"));
        assert!(ui.has_error("bad"));
        assert!(ui.has_hint("try this"));
        assert_eq!(ui.headers(), &["Title".to_string()]);
    }

    #[test]
    fn mock_records_spinner_outcomes() {
        let mut ui = MockUI::new();
        let mut spinner = ui.start_spinner("Running pkg update -y");
        spinner.finish_error("pkg update -y");

        assert_eq!(ui.spinners(), &["Running pkg update -y".to_string()]);
        assert_eq!(
            ui.spinner_results(),
            vec![(false, "pkg update -y".to_string())]
        );
    }

    #[test]
    fn message_log_sees_messages_while_ui_is_borrowed() {
        let mut ui = MockUI::new();
        let log = ui.message_log();
        {
            let borrowed: &mut dyn UserInterface = &mut ui;
            borrowed.message("  Local:   http://localhost:5000");
            assert_eq!(log.borrow().len(), 1);
        }
        assert_eq!(ui.messages(), vec!["  Local:   http://localhost:5000".to_string()]);
    }

    #[test]
    fn error_block_keeps_status_and_stderr() {
        let mut ui = MockUI::new();
        let result = CommandResult::failure(
            Some(100),
            String::new(),
            "E: Unable to locate package".to_string(),
            std::time::Duration::ZERO,
        );
        ui.show_error_block("pkg install -y git", &result);

        assert_eq!(
            ui.error_blocks(),
            &[(
                "pkg install -y git".to_string(),
                "exit code 100".to_string(),
                "E: Unable to locate package".to_string(),
            )]
        );
    }
}
