//! External command execution and probing.

pub mod command;
pub mod mock;
pub mod platform;
pub mod version;

pub use command::{
    execute_captured, CommandResult, CommandRunner, CommandSpec, DryRunRunner, SystemRunner,
};
pub use mock::RecordingRunner;
pub use platform::{is_elevated, sudo_prefix};
pub use version::{brew_version, python_version, run_and_parse_first_match, NOT_AVAILABLE};
