//! External command execution.
//!
//! Installation steps never spawn processes directly. They describe the
//! invocation as a [`CommandSpec`] and hand it to a [`CommandRunner`], so
//! the same step sequence can run for real, be printed in dry-run mode,
//! or be recorded by tests.

use crate::error::{ServeDepsError, Result};
use crate::ui::Output;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// A single external tool invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    /// Program to execute (looked up on PATH by the OS).
    pub program: String,

    /// Arguments, passed verbatim without shell interpretation.
    pub args: Vec<String>,

    /// Working directory (inherits the current one when `None`).
    pub cwd: Option<PathBuf>,
}

impl CommandSpec {
    /// Create a command with no arguments.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
        }
    }

    /// Create a command, prefixed with `sudo` when a prefix is given.
    ///
    /// Mirrors the usual `sudo apt-get ...` pattern where the prefix is
    /// dropped entirely for root or on platforms without sudo.
    pub fn elevated(sudo: Option<&str>, program: impl Into<String>) -> Self {
        match sudo {
            Some(prefix) => Self::new(prefix).arg(program.into()),
            None => Self::new(program),
        }
    }

    /// Append one argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Run in the given working directory.
    pub fn current_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.cwd = Some(dir.as_ref().to_path_buf());
        self
    }

    /// The full command line, for display and error messages.
    pub fn display_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Whether the program or any argument equals `word`.
    pub fn mentions(&self, word: &str) -> bool {
        self.program == word || self.args.iter().any(|a| a == word)
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_line())
    }
}

/// Result of a captured command execution.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            duration,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        duration: Duration,
    ) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            duration,
            success: false,
        }
    }
}

/// Executes external commands on behalf of installation steps.
pub trait CommandRunner {
    /// Run a command with inherited stdio, blocking until it exits.
    ///
    /// A non-zero exit becomes [`ServeDepsError::CommandFailed`].
    fn run(&self, command: &CommandSpec) -> Result<()>;

    /// Run a command and capture its output.
    ///
    /// Only a failure to start the process is an error; a non-zero exit
    /// is reported through [`CommandResult::success`].
    fn capture(&self, command: &CommandSpec) -> Result<CommandResult>;
}

/// Runs commands as real child processes.
#[derive(Debug)]
pub struct SystemRunner<'a> {
    output: &'a Output,
}

impl<'a> SystemRunner<'a> {
    /// Create a runner that echoes commands through `output`.
    pub fn new(output: &'a Output) -> Self {
        Self { output }
    }
}

impl CommandRunner for SystemRunner<'_> {
    fn run(&self, command: &CommandSpec) -> Result<()> {
        self.output.command(&command.display_line());
        tracing::debug!("Running: {}", command);

        let start = Instant::now();
        let status = build(command)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| {
                tracing::debug!("Failed to start {}: {}", command.program, e);
                ServeDepsError::CommandFailed {
                    command: command.display_line(),
                    code: None,
                }
            })?;

        tracing::debug!(
            "{} exited with {:?} after {:?}",
            command.program,
            status.code(),
            start.elapsed()
        );

        if status.success() {
            Ok(())
        } else {
            Err(ServeDepsError::CommandFailed {
                command: command.display_line(),
                code: status.code(),
            })
        }
    }

    fn capture(&self, command: &CommandSpec) -> Result<CommandResult> {
        execute_captured(command)
    }
}

/// Prints commands instead of running them.
///
/// Captured probes (version checks) still execute, since they are
/// read-only and their answers decide which steps get printed.
#[derive(Debug)]
pub struct DryRunRunner<'a> {
    output: &'a Output,
}

impl<'a> DryRunRunner<'a> {
    /// Create a dry-run runner that prints through `output`.
    pub fn new(output: &'a Output) -> Self {
        Self { output }
    }
}

impl CommandRunner for DryRunRunner<'_> {
    fn run(&self, command: &CommandSpec) -> Result<()> {
        self.output.planned(&command.display_line());
        Ok(())
    }

    fn capture(&self, command: &CommandSpec) -> Result<CommandResult> {
        execute_captured(command)
    }
}

fn build(spec: &CommandSpec) -> Command {
    let mut cmd = Command::new(&spec.program);
    cmd.args(&spec.args);
    if let Some(cwd) = &spec.cwd {
        cmd.current_dir(cwd);
    }
    cmd
}

/// Execute a command and collect its output without streaming.
pub fn execute_captured(spec: &CommandSpec) -> Result<CommandResult> {
    let start = Instant::now();

    let output = build(spec)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|_| ServeDepsError::CommandFailed {
            command: spec.display_line(),
            code: None,
        })?;

    let duration = start.elapsed();
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    if output.status.success() {
        Ok(CommandResult::success(stdout, stderr, duration))
    } else {
        Ok(CommandResult::failure(
            output.status.code(),
            stdout,
            stderr,
            duration,
        ))
    }
}
