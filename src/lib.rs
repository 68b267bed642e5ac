//! devboot - Local development bootstrap for JavaScript projects.
//!
//! devboot detects the host platform (Termux, Windows, or anything else),
//! makes sure Node.js and npm are available, installs the project's
//! dependencies and starts its development server, printing URLs that
//! work from the same machine and from a phone on the same network.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Optional `.devboot/config.yml` loading and validation
//! - [`environment`] - Host platform detection
//! - [`error`] - Error types and result aliases
//! - [`project`] - Manifest check and dependency installation
//! - [`requirements`] - Tool probing and per-platform provisioning
//! - [`runner`] - Setup workflow orchestration
//! - [`server`] - Dev server launch, LAN address and Ctrl+C handling
//! - [`shell`] - Shell command execution
//! - [`ui`] - Spinners and terminal output
//!
//! # Example
//!
//! ```
//! use devboot::environment::{Platform, PlatformDetector};
//! use devboot::server::server_env;
//! use devboot::config::Settings;
//!
//! let platform = PlatformDetector::new().detect_with(|_| true, "linux");
//! assert_eq!(platform, Platform::Termux);
//!
//! let env = server_env(&Settings::default());
//! assert_eq!(env["PORT"], "5000");
//! ```

pub mod cli;
pub mod config;
pub mod environment;
pub mod error;
pub mod project;
pub mod requirements;
pub mod runner;
pub mod server;
pub mod shell;
pub mod ui;

pub use error::{DevbootError, Result};
