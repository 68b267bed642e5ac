//! Configuration loading, parsing, and validation for devboot.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use devboot::config::load_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let dir = temp.path().join(".devboot");
//! fs::create_dir_all(&dir).unwrap();
//! fs::write(dir.join("config.yml"), "app_name: waves").unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! assert_eq!(config.app_name, Some("waves".to_string()));
//! assert_eq!(config.settings.port, 5000);
//! ```

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{default_config_path, load_config, load_config_file, parse_config};
pub use schema::{DevbootConfig, Settings, DEFAULT_PORT};
pub use validator::validate;
