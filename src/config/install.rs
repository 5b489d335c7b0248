//! Per-run install configuration.

use clap::ValueEnum;
use std::fmt;
use std::path::{Path, PathBuf};

/// Which dependency set to install.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Environment {
    /// Runtime dependencies only.
    #[default]
    Prod,
    /// Build and test tooling on top of the runtime dependencies.
    Dev,
}

impl Environment {
    /// Requirements file for this environment, relative to the project root.
    ///
    /// The developer set includes the common packages too.
    pub fn requirements_file(&self) -> &'static str {
        match self {
            Environment::Prod => "requirements/production.txt",
            Environment::Dev => "requirements/developer.txt",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Prod => f.write_str("prod"),
            Environment::Dev => f.write_str("dev"),
        }
    }
}

/// CUDA toolkit build of the torch packages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CudaVariant {
    #[value(name = "cu92")]
    Cu92,
    #[value(name = "cu101")]
    Cu101,
    #[value(name = "cu102")]
    Cu102,
    #[value(name = "cu111")]
    Cu111,
    #[value(name = "cu113")]
    Cu113,
    #[value(name = "cu116")]
    Cu116,
    #[value(name = "cu117")]
    Cu117,
    #[value(name = "cu118")]
    Cu118,
}

impl CudaVariant {
    /// The tag used in requirement file names and package index URLs.
    pub fn tag(&self) -> &'static str {
        match self {
            CudaVariant::Cu92 => "cu92",
            CudaVariant::Cu101 => "cu101",
            CudaVariant::Cu102 => "cu102",
            CudaVariant::Cu111 => "cu111",
            CudaVariant::Cu113 => "cu113",
            CudaVariant::Cu116 => "cu116",
            CudaVariant::Cu117 => "cu117",
            CudaVariant::Cu118 => "cu118",
        }
    }
}

impl fmt::Display for CudaVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Options for a single install run.
///
/// Built once from the command line and passed to every step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallConfig {
    /// Dependency set to install.
    pub environment: Environment,
    /// CUDA build of torch, CPU-only when `None`.
    pub accelerator: Option<CudaVariant>,
    /// Reinstall tools even when already present.
    pub force: bool,
    /// Additionally install nightly torch packages.
    pub nightly: bool,
    /// Directory holding `requirements/` and `ts_scripts/`.
    pub project_root: PathBuf,
    /// Print commands instead of running them.
    pub dry_run: bool,
}

impl InstallConfig {
    /// A production install of `project_root` with every flag off.
    pub fn new(project_root: impl AsRef<Path>) -> Self {
        Self {
            environment: Environment::Prod,
            accelerator: None,
            force: false,
            nightly: false,
            project_root: project_root.as_ref().to_path_buf(),
            dry_run: false,
        }
    }

    /// Whether this run installs the developer toolchain.
    pub fn is_dev(&self) -> bool {
        self.environment == Environment::Dev
    }

    /// Absolute path of the environment's requirements file.
    pub fn requirements_path(&self) -> PathBuf {
        self.project_root.join(self.environment.requirements_file())
    }
}
