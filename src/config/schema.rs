//! Configuration schema.
//!
//! ```yaml
//! app_name: Wave Physics
//! settings:
//!   port: 5000
//!   node_env: development
//!   manifest: package.json
//!   install_command: npm install
//!   dev_command: npm run dev
//!   probe_address: 8.8.8.8:80
//! ```
//!
//! Every field is optional; an absent file is equivalent to an empty one.

use serde::{Deserialize, Serialize};

use crate::server::DEFAULT_PROBE_ADDRESS;

/// Root of `.devboot/config.yml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DevbootConfig {
    /// Project name shown in the setup banner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_name: Option<String>,

    /// Bootstrap settings.
    #[serde(default)]
    pub settings: Settings,
}

impl DevbootConfig {
    /// Name for the setup banner.
    pub fn display_name(&self) -> &str {
        self.app_name.as_deref().unwrap_or("Project")
    }
}

/// Bootstrap settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Port the dev server is told to listen on (`PORT`).
    pub port: u16,

    /// Execution mode handed to the dev server (`NODE_ENV`).
    pub node_env: String,

    /// Dependency manifest whose presence gates the install step.
    pub manifest: String,

    /// Command that installs the project's dependencies.
    pub install_command: String,

    /// Command that starts the development server.
    pub dev_command: String,

    /// Address the UDP probe "connects" to when resolving the LAN IP.
    pub probe_address: String,
}

/// Default dev-server port.
pub const DEFAULT_PORT: u16 = 5000;

impl Default for Settings {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            node_env: "development".to_string(),
            manifest: "package.json".to_string(),
            install_command: "npm install".to_string(),
            dev_command: "npm run dev".to_string(),
            probe_address: DEFAULT_PROBE_ADDRESS.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_yaml_yields_defaults() {
        let config: DevbootConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, DevbootConfig::default());
        assert_eq!(config.settings.port, 5000);
        assert_eq!(config.settings.node_env, "development");
    }

    #[test]
    fn partial_settings_keep_other_defaults() {
        let yaml = r#"
app_name: Wave Physics
settings:
  port: 8080
"#;
        let config: DevbootConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.display_name(), "Wave Physics");
        assert_eq!(config.settings.port, 8080);
        assert_eq!(config.settings.dev_command, "npm run dev");
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result: Result<DevbootConfig, _> = serde_yaml::from_str("settings:\n  prot: 1\n");
        assert!(result.is_err());
    }

    #[test]
    fn display_name_falls_back() {
        assert_eq!(DevbootConfig::default().display_name(), "Project");
    }
}
