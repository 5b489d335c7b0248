//! Tool version probing.

use super::command::{CommandRunner, CommandSpec};
use regex::Regex;

/// Placeholder reported when a version cannot be determined.
pub const NOT_AVAILABLE: &str = "N/A";

/// Run a command and return the first capture group of `pattern` in its output.
///
/// Returns `None` when the command can't be started, exits non-zero, or
/// prints nothing matching. Both stdout and stderr are searched, since
/// some tools (older Pythons among them) print their version on stderr.
pub fn run_and_parse_first_match(
    runner: &dyn CommandRunner,
    command: &CommandSpec,
    pattern: &str,
) -> Option<String> {
    let re = Regex::new(pattern).ok()?;
    let result = runner.capture(command).ok()?;
    if !result.success {
        tracing::debug!("{} exited with {:?}", command, result.exit_code);
        return None;
    }

    let found = [&result.stdout, &result.stderr]
        .into_iter()
        .find_map(|text| re.captures(text))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string());
    found
}

/// Returns `brew --version` output, or [`NOT_AVAILABLE`].
pub fn brew_version(runner: &dyn CommandRunner) -> String {
    run_and_parse_first_match(
        runner,
        &CommandSpec::new("brew").arg("--version"),
        r"Homebrew (.*)",
    )
    .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Returns the `(major, minor)` version of a Python interpreter.
pub fn python_version(runner: &dyn CommandRunner, python: &str) -> Option<(u32, u32)> {
    let version = run_and_parse_first_match(
        runner,
        &CommandSpec::new(python).arg("--version"),
        r"Python (\d+\.\d+)",
    )?;
    let (major, minor) = version.split_once('.')?;
    Some((major.parse().ok()?, minor.parse().ok()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::{CommandResult, RecordingRunner};

    #[test]
    fn brew_version_extracts_release() {
        let runner = RecordingRunner::new()
            .with_output("brew", "Homebrew 4.2.5\nHomebrew/homebrew-core (git revision 1a2b)\n");
        assert_eq!(brew_version(&runner), "4.2.5");
    }

    #[test]
    fn brew_version_not_available_when_brew_fails() {
        let runner = RecordingRunner::new().fail_on("brew", 127);
        assert_eq!(brew_version(&runner), NOT_AVAILABLE);
    }

    #[test]
    fn brew_version_not_available_on_unexpected_output() {
        let runner = RecordingRunner::new().with_output("brew", "command not found");
        assert_eq!(brew_version(&runner), NOT_AVAILABLE);
    }

    #[test]
    fn python_version_parses_major_minor() {
        let runner = RecordingRunner::new().with_output("python3", "Python 3.10.12\n");
        assert_eq!(python_version(&runner, "python3"), Some((3, 10)));
    }

    #[test]
    fn version_found_on_stderr() {
        struct StderrRunner;

        impl CommandRunner for StderrRunner {
            fn run(&self, _command: &CommandSpec) -> crate::error::Result<()> {
                Ok(())
            }

            fn capture(&self, _command: &CommandSpec) -> crate::error::Result<CommandResult> {
                Ok(CommandResult::success(
                    String::new(),
                    "Python 2.7.18\n".to_string(),
                    std::time::Duration::ZERO,
                ))
            }
        }

        assert_eq!(python_version(&StderrRunner, "python"), Some((2, 7)));
    }

    #[test]
    fn python_version_none_for_garbage() {
        let runner = RecordingRunner::new().with_output("python3", "Python three\n");
        assert_eq!(python_version(&runner, "python3"), None);
    }
}
