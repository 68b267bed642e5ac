//! Host platform detection.
//!
//! Classifies the host as a Termux mobile terminal, Windows, or anything
//! else. Termux is checked first because it reports itself as Linux (or
//! Android) at the OS level.

use serde::Serialize;
use std::fmt;
use std::path::Path;

/// Directory that exists only inside a Termux installation.
pub const TERMUX_MARKER: &str = "/data/data/com.termux";

/// The platform families devboot knows how to provision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Termux-style Unix terminal running on a mobile OS.
    Termux,
    /// Microsoft Windows.
    Windows,
    /// Any other host (Linux desktop, macOS, BSD, ...).
    Other,
}

impl Platform {
    /// Stable lowercase identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Termux => "termux",
            Platform::Windows => "windows",
            Platform::Other => "other",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Platform detector.
///
/// # Example
///
/// ```
/// use devboot::environment::{Platform, PlatformDetector};
///
/// let platform = PlatformDetector::new().detect_with(|_| false, "windows");
/// assert_eq!(platform, Platform::Windows);
/// ```
#[derive(Debug, Clone)]
pub struct PlatformDetector {
    marker: &'static str,
}

impl PlatformDetector {
    /// Create a detector using the standard Termux marker.
    pub fn new() -> Self {
        Self {
            marker: TERMUX_MARKER,
        }
    }

    /// Detect the platform of the running host.
    pub fn detect(&self) -> Platform {
        self.detect_with(|path| path.exists(), std::env::consts::OS)
    }

    /// Detect with an injected filesystem check and OS name (for testing).
    pub fn detect_with<F>(&self, marker_exists: F, os: &str) -> Platform
    where
        F: Fn(&Path) -> bool,
    {
        let platform = if marker_exists(Path::new(self.marker)) {
            Platform::Termux
        } else if os.eq_ignore_ascii_case("windows") {
            Platform::Windows
        } else {
            Platform::Other
        };

        tracing::debug!("Detected platform {} (os: {})", platform, os);
        platform
    }
}

impl Default for PlatformDetector {
    fn default() -> Self {
        Self::new()
    }
}

/// Detect the platform of the running host.
pub fn detect_platform() -> Platform {
    PlatformDetector::new().detect()
}

/// Human-readable OS name for the "unsupported platform" warning.
pub fn os_name() -> &'static str {
    match std::env::consts::OS {
        "linux" => "Linux",
        "macos" => "Darwin",
        "windows" => "Windows",
        "android" => "Android",
        "freebsd" => "FreeBSD",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn termux_marker_wins() {
        let detector = PlatformDetector::new();
        assert_eq!(
            detector.detect_with(|p| p == Path::new(TERMUX_MARKER), "linux"),
            Platform::Termux
        );
    }

    #[test]
    fn termux_marker_wins_even_on_windows_os() {
        let detector = PlatformDetector::new();
        assert_eq!(detector.detect_with(|_| true, "windows"), Platform::Termux);
    }

    #[test]
    fn windows_without_marker() {
        let detector = PlatformDetector::new();
        assert_eq!(detector.detect_with(|_| false, "windows"), Platform::Windows);
    }

    #[test]
    fn everything_else_is_other() {
        let detector = PlatformDetector::new();
        for os in ["linux", "macos", "freebsd", "android", ""] {
            assert_eq!(detector.detect_with(|_| false, os), Platform::Other);
        }
    }

    #[test]
    fn detect_returns_a_known_platform() {
        let platform = detect_platform();
        assert!(matches!(
            platform,
            Platform::Termux | Platform::Windows | Platform::Other
        ));
    }

    #[test]
    fn platform_display_and_serialize() {
        assert_eq!(Platform::Termux.to_string(), "termux");
        assert_eq!(
            serde_json::to_string(&Platform::Windows).unwrap(),
            "\"windows\""
        );
    }

    #[test]
    fn os_name_is_not_empty() {
        assert!(!os_name().is_empty());
    }
}
