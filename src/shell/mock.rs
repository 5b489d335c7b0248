//! Recording command runner for tests.

use super::command::{CommandResult, CommandRunner, CommandSpec};
use crate::error::{Result, ServeDepsError};
use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Duration;

/// A [`CommandRunner`] that records invocations instead of executing them.
///
/// Failures and captured output are scripted per program name (or per
/// word appearing in the command line, for `sudo`-prefixed commands).
#[derive(Debug, Default)]
pub struct RecordingRunner {
    commands: RefCell<Vec<CommandSpec>>,
    failures: HashMap<String, i32>,
    outputs: HashMap<String, String>,
}

impl RecordingRunner {
    /// Create a runner where every command succeeds with empty output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make any command mentioning `word` exit with `code`.
    pub fn fail_on(mut self, word: &str, code: i32) -> Self {
        self.failures.insert(word.to_string(), code);
        self
    }

    /// Make captured runs of `program` print `stdout`.
    pub fn with_output(mut self, program: &str, stdout: &str) -> Self {
        self.outputs.insert(program.to_string(), stdout.to_string());
        self
    }

    /// Every command run or captured so far, in order.
    pub fn commands(&self) -> Vec<CommandSpec> {
        self.commands.borrow().clone()
    }

    /// Command lines run so far, in order.
    pub fn lines(&self) -> Vec<String> {
        self.commands
            .borrow()
            .iter()
            .map(CommandSpec::display_line)
            .collect()
    }

    /// Number of recorded commands mentioning `word`.
    pub fn count_mentioning(&self, word: &str) -> usize {
        self.commands
            .borrow()
            .iter()
            .filter(|c| c.mentions(word))
            .count()
    }

    /// Index of the first recorded command whose line contains `needle`.
    pub fn position(&self, needle: &str) -> Option<usize> {
        self.lines().iter().position(|l| l.contains(needle))
    }

    fn scripted_failure(&self, command: &CommandSpec) -> Option<i32> {
        self.failures
            .iter()
            .find(|(word, _)| command.mentions(word))
            .map(|(_, code)| *code)
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, command: &CommandSpec) -> Result<()> {
        self.commands.borrow_mut().push(command.clone());
        match self.scripted_failure(command) {
            Some(code) => Err(ServeDepsError::CommandFailed {
                command: command.display_line(),
                code: Some(code),
            }),
            None => Ok(()),
        }
    }

    fn capture(&self, command: &CommandSpec) -> Result<CommandResult> {
        self.commands.borrow_mut().push(command.clone());
        if let Some(code) = self.scripted_failure(command) {
            return Ok(CommandResult::failure(
                Some(code),
                String::new(),
                String::new(),
                Duration::ZERO,
            ));
        }
        let stdout = self
            .outputs
            .get(&command.program)
            .cloned()
            .unwrap_or_default();
        Ok(CommandResult::success(stdout, String::new(), Duration::ZERO))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_commands_in_order() {
        let runner = RecordingRunner::new();
        runner.run(&CommandSpec::new("first")).unwrap();
        runner.run(&CommandSpec::new("second").arg("x")).unwrap();
        assert_eq!(runner.lines(), vec!["first", "second x"]);
    }

    #[test]
    fn scripted_failure_returns_exit_code() {
        let runner = RecordingRunner::new().fail_on("make", 2);
        let err = runner
            .run(&CommandSpec::elevated(Some("sudo"), "make").arg("install"))
            .unwrap_err();
        assert!(matches!(
            err,
            ServeDepsError::CommandFailed { code: Some(2), .. }
        ));
        assert_eq!(runner.commands().len(), 1);
    }

    #[test]
    fn capture_returns_scripted_output() {
        let runner = RecordingRunner::new().with_output("brew", "Homebrew 4.1.0\n");
        let result = runner
            .capture(&CommandSpec::new("brew").arg("--version"))
            .unwrap();
        assert!(result.success);
        assert_eq!(result.stdout, "Homebrew 4.1.0\n");
    }
}
