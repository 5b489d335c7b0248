//! servedeps - install the build and test dependencies of the model server.
//!
//! One invocation brings a Linux, macOS or Windows host to the state needed
//! to build, test and run the server: Node.js tooling and a native library
//! for development, a JDK, and the Python packages pinned for the chosen
//! CUDA variant.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Install options and project settings
//! - [`error`] - Error types and result aliases
//! - [`fetch`] - HTTP downloads
//! - [`installer`] - The ordered install sequence
//! - [`platform`] - Per-OS installation strategies
//! - [`prerequisites`] - Locating required binaries on `PATH`
//! - [`shell`] - Shell command execution
//! - [`ui`] - Spinners and terminal output
//!
//! # Example
//!
//! ```
//! use servedeps::config::{CudaVariant, InstallConfig};
//! use servedeps::platform::{packages::torch_requirements_file, OsKind};
//!
//! let mut config = InstallConfig::new("/srv/serve");
//! config.accelerator = Some(CudaVariant::Cu117);
//!
//! let file = torch_requirements_file(OsKind::Linux, config.accelerator);
//! assert!(file.ends_with("torch_cu117_linux.txt"));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod installer;
pub mod platform;
pub mod prerequisites;
pub mod shell;
pub mod ui;

pub use error::{Result, ServeDepsError};
