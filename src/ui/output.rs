//! Output mode and writer.

use super::spinner::ProgressSpinner;
use super::theme::Theme;

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Also echo every command before it runs.
    Verbose,
    /// Show steps and status.
    #[default]
    Normal,
    /// Show warnings, errors and dry-run plans only.
    Quiet,
}

impl OutputMode {
    /// Check if this mode echoes commands before running them.
    pub fn shows_commands(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows step and status messages.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Quiet)
    }
}

/// Output writer that respects output mode.
#[derive(Debug)]
pub struct Output {
    mode: OutputMode,
    theme: Theme,
}

impl Output {
    /// Create a new output writer, colored when stdout is a terminal.
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            theme: Theme::detect(),
        }
    }

    /// Create an output writer with an explicit theme.
    pub fn with_theme(mode: OutputMode, theme: Theme) -> Self {
        Self { mode, theme }
    }

    /// Show a header/banner.
    pub fn header(&self, title: &str) {
        if self.mode.shows_status() {
            println!("{}", self.theme.format_header(title));
        }
    }

    /// Announce the start of an installation step.
    pub fn step(&self, title: &str) {
        if self.mode.shows_status() {
            println!("{}", self.theme.format_step(title));
        }
    }

    /// Echo a command that is about to run (verbose only).
    pub fn command(&self, line: &str) {
        if self.mode.shows_commands() {
            println!("  {}", self.theme.format_command(line));
        }
    }

    /// Print a command that a dry run would execute.
    pub fn planned(&self, line: &str) {
        println!("  {}", self.theme.format_command(line));
    }

    /// Display a success message.
    pub fn success(&self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", self.theme.format_success(msg));
        }
    }

    /// Report a step that had nothing to do.
    pub fn skipped(&self, msg: &str) {
        if self.mode.shows_status() {
            println!("  {}", self.theme.format_skipped(msg));
        }
    }

    /// Display a warning message.
    pub fn warning(&self, msg: &str) {
        eprintln!("{}", self.theme.format_warning(msg));
    }

    /// Display an error message.
    pub fn error(&self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }

    /// Start a spinner, hidden in quiet mode.
    pub fn spinner(&self, msg: &str) -> ProgressSpinner {
        if self.mode.shows_status() && console::Term::stderr().is_term() {
            ProgressSpinner::new(msg, self.theme.clone())
        } else {
            ProgressSpinner::hidden()
        }
    }
}
