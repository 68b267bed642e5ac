//! Shell command execution and environment checks.

pub mod command;
pub mod platform;

pub use command::{execute, execute_attached, CommandOptions, CommandResult};
pub use platform::{is_ci, is_ci_with_env};
