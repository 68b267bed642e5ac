//! The downstream project being bootstrapped.
//!
//! devboot never parses the project's files; it only checks that the
//! dependency manifest exists and shells out to the project's package
//! manager.

pub mod install;

pub use install::{install_dependencies, manifest_path, manifest_present};
