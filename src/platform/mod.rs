//! Platform variants.
//!
//! Each supported OS provides its own way of installing the same set of
//! prerequisites. The variant is picked once per run from [`OsKind`] and
//! driven by [`crate::installer`].
//!
//! - [`context`] - Everything a step needs: config, settings, runner, probe
//! - [`linux`], [`macos`], [`windows`] - The three variants
//! - [`packages`] - Python package installation shared by all variants
//! - [`native`] - Building a native library from a source tarball

pub mod context;
pub mod linux;
pub mod macos;
pub mod native;
pub mod packages;
pub mod windows;

pub use context::InstallContext;
pub use linux::Linux;
pub use macos::MacOs;
pub use windows::Windows;

use crate::config::{CudaVariant, NativeLibrary};
use crate::error::Result;
use crate::prerequisites::Runtime;
use crate::shell::CommandSpec;
use clap::ValueEnum;
use std::fmt;
use std::path::Path;

/// Operating systems with an installation variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OsKind {
    Linux,
    Windows,
    #[value(name = "macos", alias = "darwin")]
    MacOs,
}

impl OsKind {
    /// Detect the current platform.
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            OsKind::MacOs
        } else if cfg!(target_os = "windows") {
            OsKind::Windows
        } else {
            OsKind::Linux
        }
    }

    /// Lower-case system name used in requirement file names.
    pub fn system_name(&self) -> &'static str {
        match self {
            OsKind::Linux => "linux",
            OsKind::Windows => "windows",
            OsKind::MacOs => "darwin",
        }
    }
}

impl fmt::Display for OsKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OsKind::Linux => f.write_str("Linux"),
            OsKind::Windows => f.write_str("Windows"),
            OsKind::MacOs => f.write_str("macOS"),
        }
    }
}

/// OS-specific implementation of the installation steps.
///
/// Steps are stateless: each one either does nothing on this OS or runs a
/// sequence of external tools, and any failure aborts the run.
pub trait PlatformVariant {
    /// The OS this variant installs for.
    fn os(&self) -> OsKind;

    /// Prefix for commands that need root, if any.
    fn sudo(&self) -> Option<&str>;

    /// One-time setup before any step runs.
    fn prepare(&self, _ctx: &InstallContext<'_>) -> Result<()> {
        Ok(())
    }

    /// Make sure `kind` is on the search path, installing it if possible.
    ///
    /// Honors `--force` by reinstalling even when already present.
    fn ensure_runtime_present(&self, ctx: &InstallContext<'_>, kind: Runtime) -> Result<()>;

    /// Install the pinned Node.js release.
    fn install_js_runtime(&self, ctx: &InstallContext<'_>) -> Result<()>;

    /// Install the global npm tools used by the test suite.
    fn install_js_tooling(&self, ctx: &InstallContext<'_>) -> Result<()> {
        ctx.output.step("Installing npm tools");
        let npm = CommandSpec::elevated(self.sudo(), "npm")
            .args(["install", "-g"])
            .args(ctx.settings.npm_packages.iter().cloned());
        ctx.runner.run(&npm)
    }

    /// Build and install a native library from source.
    fn install_native_library(
        &self,
        _ctx: &InstallContext<'_>,
        library: &NativeLibrary,
    ) -> Result<()> {
        tracing::debug!("{} is not built from source on {}", library.name, self.os());
        Ok(())
    }

    /// Install the torch build and the environment's Python requirements.
    fn install_language_packages(
        &self,
        ctx: &InstallContext<'_>,
        accelerator: Option<CudaVariant>,
        requirements: &Path,
        nightly: bool,
    ) -> Result<()> {
        packages::install_language_packages(ctx, self.os(), accelerator, requirements, nightly)
    }
}

/// Select the variant for `os`.
pub fn select_variant(os: OsKind) -> Box<dyn PlatformVariant> {
    match os {
        OsKind::Linux => Box::new(Linux::new()),
        OsKind::Windows => Box::new(Windows::new()),
        OsKind::MacOs => Box::new(MacOs::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_names_match_requirement_files() {
        assert_eq!(OsKind::Linux.system_name(), "linux");
        assert_eq!(OsKind::Windows.system_name(), "windows");
        assert_eq!(OsKind::MacOs.system_name(), "darwin");
    }

    #[test]
    fn darwin_is_accepted_for_macos() {
        assert_eq!(OsKind::from_str("darwin", false).unwrap(), OsKind::MacOs);
        assert_eq!(OsKind::from_str("macos", false).unwrap(), OsKind::MacOs);
    }

    #[test]
    fn select_variant_matches_os() {
        for os in OsKind::value_variants() {
            assert_eq!(select_variant(*os).os(), *os);
        }
    }

    #[test]
    fn windows_never_uses_sudo() {
        assert!(select_variant(OsKind::Windows).sudo().is_none());
    }
}
