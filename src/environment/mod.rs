//! Host environment detection.
//!
//! Determines which platform family devboot is running on so the
//! provisioner can pick its strategy:
//!
//! 1. Termux marker directory present → Termux
//! 2. OS reports Windows → Windows
//! 3. Anything else → Other

pub mod detection;

pub use detection::{detect_platform, os_name, Platform, PlatformDetector, TERMUX_MARKER};
