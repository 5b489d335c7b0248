//! Configuration for an install run.
//!
//! - [`install`] - Per-run options parsed from the command line
//! - [`settings`] - Pinned versions and URLs, overridable from YAML
//! - [`loader`] - Settings file discovery and parsing

pub mod install;
pub mod loader;
pub mod settings;

pub use install::{CudaVariant, Environment, InstallConfig};
pub use loader::{load_settings, PROJECT_SETTINGS};
pub use settings::{NativeLibrary, Settings};
