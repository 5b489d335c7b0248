//! Command-line interface for servedeps.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`run`] - Wires the parsed arguments into an install run

pub mod args;

pub use args::Cli;

use crate::config::load_settings;
use crate::error::Result;
use crate::fetch::{DryRunFetcher, Fetch, HttpFetcher};
use crate::installer::install_dependencies;
use crate::platform::{select_variant, InstallContext};
use crate::prerequisites::SystemPathProbe;
use crate::shell::{CommandRunner, DryRunRunner, SystemRunner};
use crate::ui::Output;
use std::path::{Path, PathBuf};

/// Absolute project root: `--project` resolved against the working
/// directory, or the working directory itself.
///
/// Commands run with the project as their working directory, so a
/// relative root would be resolved twice.
pub fn resolve_project_root(project: Option<&Path>) -> Result<PathBuf> {
    let root = match project {
        Some(path) => std::path::absolute(path)?,
        None => std::env::current_dir()?,
    };
    Ok(root)
}

/// Run a full install with the given arguments.
pub fn run(cli: &Cli, output: &Output) -> Result<()> {
    let project_root = resolve_project_root(cli.project.as_deref())?;

    let mut settings = load_settings(&project_root, cli.config.as_deref())?;
    if let Some(python) = &cli.python {
        settings.python = python.clone();
    }

    let config = cli.install_config(&project_root);
    let os = cli.target_os();
    let variant = select_variant(os);
    tracing::debug!("Target platform: {} ({})", os, os.system_name());

    let scratch = tempfile::Builder::new().prefix("servedeps-").tempdir()?;

    let runner: Box<dyn CommandRunner + '_> = if config.dry_run {
        Box::new(DryRunRunner::new(output))
    } else {
        Box::new(SystemRunner::new(output))
    };
    let fetcher: Box<dyn Fetch> = if config.dry_run {
        Box::new(DryRunFetcher)
    } else {
        Box::new(HttpFetcher::new()?)
    };
    let probe = SystemPathProbe::from_env();

    output.header(&format!(
        "Installing {} dependencies ({})",
        config.environment, os
    ));

    let ctx = InstallContext {
        config: &config,
        settings: &settings,
        runner: runner.as_ref(),
        probe: &probe,
        fetcher: fetcher.as_ref(),
        output,
        scratch_dir: scratch.path(),
    };
    install_dependencies(variant.as_ref(), &ctx)?;

    if config.dry_run {
        output.success("Dry run complete");
    } else {
        output.success("All dependencies installed");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_project_is_made_absolute() {
        let root = resolve_project_root(Some(Path::new("serve"))).unwrap();
        assert!(root.is_absolute());
        assert_eq!(root, std::env::current_dir().unwrap().join("serve"));
    }

    #[test]
    fn absolute_project_is_kept() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(resolve_project_root(Some(&cwd)).unwrap(), cwd);
    }

    #[test]
    fn missing_project_defaults_to_working_directory() {
        let root = resolve_project_root(None).unwrap();
        assert_eq!(root, std::env::current_dir().unwrap());
    }
}
