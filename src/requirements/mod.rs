//! Required tool detection and provisioning.
//!
//! # Modules
//!
//! - [`probe`] - Checks whether a tool is on PATH and answers `--version`
//! - [`installer`] - Per-platform provisioning of missing tools

pub mod installer;
pub mod probe;

pub use installer::{default_context, provision, ProvisionContext, NODE_DOWNLOAD_URL};
pub use probe::{tool_present, tool_version, Tool, ALL_TOOLS, GIT, NODE, NPM};
