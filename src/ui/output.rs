//! How much devboot prints.

/// Output level chosen with `--verbose` / `--quiet`.
///
/// Messages, warnings, hints and errors are shown in every mode, so the
/// server URLs survive `--quiet`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Status lines plus captured `pkg`/`npm install` output.
    Verbose,
    #[default]
    Normal,
    /// No banners, spinners or success lines.
    Quiet,
}

impl OutputMode {
    /// Pick the mode from the global flags. clap rejects both being set.
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        match (verbose, quiet) {
            (_, true) => Self::Quiet,
            (true, false) => Self::Verbose,
            (false, false) => Self::Normal,
        }
    }

    /// Banners, spinners and success lines.
    pub fn shows_progress(self) -> bool {
        self != Self::Quiet
    }

    /// Captured stdout of package commands.
    pub fn shows_command_output(self) -> bool {
        self == Self::Verbose
    }
}
