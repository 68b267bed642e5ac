//! Visual theme and styling.

use console::Style;

/// devboot's visual theme.
#[derive(Debug, Clone)]
pub struct DevbootTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
    /// Style for headers (cyan bold).
    pub header: Style,
    /// Style for commands shown in output (dim italic).
    pub command: Style,
    /// Style for box-drawing borders (dim).
    pub border: Style,
    /// Style for contextual hints (cyan dim).
    pub hint: Style,
}

impl Default for DevbootTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl DevbootTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            header: Style::new().bold().cyan(),
            command: Style::new().dim().italic(),
            border: Style::new().dim(),
            hint: Style::new().cyan().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
            command: Style::new(),
            border: Style::new(),
            hint: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a header banner.
    pub fn format_header(&self, title: &str) -> String {
        let rule = "═".repeat(50);
        format!(
            "{}\n{} {}\n{}",
            self.border.apply_to(&rule),
            self.header.apply_to("▲"),
            self.highlight.apply_to(title),
            self.border.apply_to(&rule),
        )
    }

    /// Box showing a failed command, how it ended and its stderr.
    pub fn format_error_block(&self, command: &str, status: &str, stderr: &str) -> String {
        let b = &self.border;
        let mut lines = vec![
            format!("{} {}", b.apply_to("┌─"), self.command.apply_to(command)),
            format!("{} {}", b.apply_to("│"), self.error.apply_to(status)),
        ];
        let stderr = stderr.trim_end();
        if !stderr.is_empty() {
            lines.push(format!("{}", b.apply_to("├─ stderr")));
            lines.extend(
                stderr
                    .lines()
                    .map(|line| format!("{} {}", b.apply_to("│"), self.dim.apply_to(line))),
            );
        }
        lines.push(format!("{}", b.apply_to("└─")));
        lines
            .iter()
            .map(|line| format!("    {}", line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_formats_success() {
        let theme = DevbootTheme::plain();
        let msg = theme.format_success("Complete");
        assert!(msg.contains("✓"));
        assert!(msg.contains("Complete"));
    }

    #[test]
    fn theme_formats_warning() {
        let theme = DevbootTheme::plain();
        let msg = theme.format_warning("Caution");
        assert!(msg.contains("⚠"));
        assert!(msg.contains("Caution"));
    }

    #[test]
    fn theme_formats_error() {
        let theme = DevbootTheme::plain();
        let msg = theme.format_error("Failed");
        assert!(msg.contains("✗"));
        assert!(msg.contains("Failed"));
    }

    #[test]
    fn theme_formats_header_with_rules() {
        let theme = DevbootTheme::plain();
        let msg = theme.format_header("Wave App - Local Setup");
        assert!(msg.contains("Wave App - Local Setup"));
        assert_eq!(msg.lines().count(), 3);
        assert!(msg.starts_with("═"));
    }

    #[test]
    fn error_block_shows_status_and_stderr() {
        let block = DevbootTheme::plain().format_error_block(
            "npm install",
            "exit code 1",
            "npm ERR! code ERESOLVE\nnpm ERR! peer dep\n",
        );
        let lines: Vec<&str> = block.lines().collect();

        assert_eq!(lines[0], "    ┌─ npm install");
        assert_eq!(lines[1], "    │ exit code 1");
        assert_eq!(lines[3], "    │ npm ERR! code ERESOLVE");
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn error_block_without_stderr_skips_section() {
        let block = DevbootTheme::plain().format_error_block("pkg update -y", "signal 9", "  \n");
        assert!(!block.contains("stderr"));
        assert_eq!(block.lines().count(), 3);
    }

    #[test]
    fn default_impl_matches_new() {
        let default = DevbootTheme::default();
        let new = DevbootTheme::new();
        assert_eq!(default.format_success("test"), new.format_success("test"));
    }
}
