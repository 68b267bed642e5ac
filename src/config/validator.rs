//! Configuration validation.

use crate::config::schema::DevbootConfig;
use crate::error::{DevbootError, Result};

/// Validate a loaded configuration.
///
/// Checks that the port is usable, the commands are non-empty and the
/// manifest is a bare file name in the project root.
pub fn validate(config: &DevbootConfig) -> Result<()> {
    let settings = &config.settings;

    if settings.port == 0 {
        return Err(invalid("settings.port must be between 1 and 65535"));
    }

    for (field, value) in [
        ("settings.install_command", &settings.install_command),
        ("settings.dev_command", &settings.dev_command),
        ("settings.node_env", &settings.node_env),
    ] {
        if value.trim().is_empty() {
            return Err(invalid(&format!("{} must not be empty", field)));
        }
    }

    let manifest = settings.manifest.trim();
    if manifest.is_empty() || manifest.contains('/') || manifest.contains('\\') {
        return Err(invalid(
            "settings.manifest must be a file name in the project root",
        ));
    }

    let port_ok = settings
        .probe_address
        .rsplit_once(':')
        .is_some_and(|(host, port)| !host.is_empty() && port.parse::<u16>().is_ok());
    if !port_ok {
        return Err(invalid("settings.probe_address must be host:port"));
    }

    Ok(())
}

fn invalid(message: &str) -> DevbootError {
    DevbootError::ConfigValidationError {
        message: message.to_string(),
    }
}
