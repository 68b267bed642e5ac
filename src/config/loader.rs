//! Configuration file discovery and loading.

use crate::config::schema::DevbootConfig;
use crate::config::validator::validate;
use crate::error::{DevbootError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding devboot's project config.
pub const CONFIG_DIR: &str = ".devboot";

/// Config file name inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "config.yml";

/// Default config path for a project root.
pub fn default_config_path(project_root: &Path) -> PathBuf {
    project_root.join(CONFIG_DIR).join(CONFIG_FILE)
}

/// Load a single config file and parse it into DevbootConfig.
///
/// # Errors
///
/// Returns `Io` if the file can't be read.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<DevbootConfig> {
    let content = fs::read_to_string(path)?;
    parse_config(&content, path)
}

/// Parse YAML content into DevbootConfig.
///
/// An empty document is treated as an empty mapping.
pub fn parse_config(content: &str, source_path: &Path) -> Result<DevbootConfig> {
    if content.trim().is_empty() {
        return Ok(DevbootConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| DevbootError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load the project config, falling back to defaults.
///
/// With `config_override`, that file must exist. Without it, a missing
/// `.devboot/config.yml` yields [`DevbootConfig::default`]. The loaded
/// config is validated before it is returned.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<DevbootConfig> {
    let config = match config_override {
        Some(path) => {
            tracing::debug!("Loading config from {}", path.display());
            load_config_file(path)?
        }
        None => {
            let path = default_config_path(project_root);
            if path.is_file() {
                tracing::debug!("Loading config from {}", path.display());
                load_config_file(&path)?
            } else {
                tracing::debug!("No config at {}, using defaults", path.display());
                DevbootConfig::default()
            }
        }
    };

    validate(&config)?;
    Ok(config)
}
