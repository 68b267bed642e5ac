//! Ctrl+C tracking while the dev server runs.
//!
//! The dev server shares our terminal, so Ctrl+C reaches it directly. The
//! handler only records that it happened; devboot keeps waiting for the
//! child and then shuts down cleanly instead of dying with it.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::shell::CommandResult;

static INTERRUPTED: AtomicBool = AtomicBool::new(false);

/// Exit code Windows reports for a process ended by Ctrl+C (`STATUS_CONTROL_C_EXIT`).
const WINDOWS_CTRL_C_EXIT: i32 = 0xC000_013Au32 as i32;

/// Install the SIGINT handler. Safe to call more than once.
#[cfg(unix)]
pub fn install_handler() {
    extern "C" fn on_sigint(_signal: libc::c_int) {
        INTERRUPTED.store(true, Ordering::SeqCst);
    }

    // SAFETY: the handler only touches an atomic, which is async-signal-safe.
    unsafe {
        libc::signal(libc::SIGINT, on_sigint as *const () as libc::sighandler_t);
    }
    tracing::debug!("SIGINT handler installed");
}

/// Windows delivers Ctrl+C to the whole console; the exit status is checked instead.
#[cfg(not(unix))]
pub fn install_handler() {}

/// Whether Ctrl+C has been received since startup.
pub fn interrupted() -> bool {
    INTERRUPTED.load(Ordering::SeqCst)
}

/// Exit status shells report for a child stopped by SIGINT (128 + 2).
const SHELL_SIGINT_EXIT: i32 = 130;

#[cfg(unix)]
const SIGINT: i32 = libc::SIGINT;
#[cfg(not(unix))]
const SIGINT: i32 = 2;

/// Whether a finished child was stopped by Ctrl+C.
///
/// Other signals (SIGKILL from the OOM killer, SIGSEGV) are crashes.
pub fn is_interrupt_exit(result: &CommandResult) -> bool {
    match result.exit_code {
        Some(code) => code == SHELL_SIGINT_EXIT || code == WINDOWS_CTRL_C_EXIT,
        None => result.signal == Some(SIGINT),
    }
}
