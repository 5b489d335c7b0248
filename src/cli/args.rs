//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use crate::config::{CudaVariant, Environment, InstallConfig};
use crate::platform::OsKind;
use crate::ui::OutputMode;
use clap::Parser;
use std::path::{Path, PathBuf};

/// Install various build and test dependencies of the model server.
#[derive(Debug, Parser)]
#[command(name = "servedeps")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// CUDA version for torch
    #[arg(long, value_enum, env = "SERVEDEPS_CUDA")]
    pub cuda: Option<CudaVariant>,

    /// Environment (production or developer) on which dependencies will be installed
    #[arg(long, value_enum, default_value_t = Environment::Prod, env = "SERVEDEPS_ENVIRONMENT")]
    pub environment: Environment,

    /// Install nightly version of torch package
    #[arg(long = "nightly_torch", alias = "nightly-torch")]
    pub nightly_torch: bool,

    /// Force reinstall dependencies wget, node, java and apt-update
    #[arg(long)]
    pub force: bool,

    /// Path to project root (overrides current directory)
    #[arg(short, long)]
    pub project: Option<PathBuf>,

    /// Path to settings file (overrides default .servedeps/config.yml)
    #[arg(short, long, env = "SERVEDEPS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Python interpreter to install packages into
    #[arg(long, env = "SERVEDEPS_PYTHON")]
    pub python: Option<String>,

    /// Print commands without executing them
    #[arg(long)]
    pub dry_run: bool,

    /// Show every command before it runs
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Install for another platform (dry-run previews)
    #[arg(long, value_enum, hide = true)]
    pub platform: Option<OsKind>,
}

impl Cli {
    /// Output mode selected by `--quiet` / `--verbose`.
    pub fn output_mode(&self) -> OutputMode {
        if self.quiet {
            OutputMode::Quiet
        } else if self.verbose {
            OutputMode::Verbose
        } else {
            OutputMode::Normal
        }
    }

    /// Build the install configuration for `project_root`.
    pub fn install_config(&self, project_root: &Path) -> InstallConfig {
        InstallConfig {
            environment: self.environment,
            accelerator: self.cuda,
            force: self.force,
            nightly: self.nightly_torch,
            project_root: project_root.to_path_buf(),
            dry_run: self.dry_run,
        }
    }

    /// Platform to install for: the override, or the host.
    pub fn target_os(&self) -> OsKind {
        self.platform.unwrap_or_else(OsKind::current)
    }
}
