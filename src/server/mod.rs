//! Dev server launch: URL discovery, environment overlay and interrupt handling.

pub mod interrupt;
pub mod launcher;
pub mod network;

pub use launcher::{announce, launch, server_env, LaunchOutcome, ServerRunner, ServerUrls};
pub use network::{local_ip_via, DEFAULT_PROBE_ADDRESS};
