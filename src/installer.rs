//! The install sequence.
//!
//! Steps run in a fixed order and the first failure ends the run. The
//! order matters: the JDK has to be in place before the Python packages,
//! some of which expect it.

use crate::error::{Result, ServeDepsError};
use crate::platform::{InstallContext, OsKind, PlatformVariant};
use crate::prerequisites::Runtime;
use crate::shell::python_version;

/// Oldest supported Python interpreter.
pub const MIN_PYTHON: (u32, u32) = (3, 8);

/// Fail unless the configured interpreter is at least [`MIN_PYTHON`].
pub fn check_python_version(ctx: &InstallContext<'_>) -> Result<()> {
    let python = &ctx.settings.python;
    match python_version(ctx.runner, python) {
        Some(version) if version >= MIN_PYTHON => {
            tracing::debug!("{} is Python {}.{}", python, version.0, version.1);
            Ok(())
        }
        Some((major, minor)) => Err(ServeDepsError::MissingPrerequisite {
            requirement: "python".to_string(),
            message: format!(
                "{} is Python {}.{}; Python {}.{} or newer is required",
                python, major, minor, MIN_PYTHON.0, MIN_PYTHON.1
            ),
        }),
        None => Err(ServeDepsError::MissingPrerequisite {
            requirement: "python".to_string(),
            message: format!(
                "Could not run '{} --version'. Install Python {}.{}+ or pass --python",
                python, MIN_PYTHON.0, MIN_PYTHON.1
            ),
        }),
    }
}

/// Install every dependency for the configured environment.
pub fn install_dependencies(variant: &dyn PlatformVariant, ctx: &InstallContext<'_>) -> Result<()> {
    let config = ctx.config;
    tracing::info!(
        "Installing {} dependencies for {}",
        config.environment,
        variant.os()
    );

    if config.dry_run {
        tracing::debug!("Skipping Python version check in dry-run mode");
    } else {
        check_python_version(ctx)?;
    }

    variant.prepare(ctx)?;

    if config.is_dev() {
        variant.ensure_runtime_present(ctx, Runtime::DownloadUtility)?;
        variant.install_js_runtime(ctx)?;
        variant.install_js_tooling(ctx)?;
    }

    if variant.os() == OsKind::Linux && config.is_dev() {
        variant.install_native_library(ctx, &ctx.settings.native_library)?;
    }

    // Sequence of installation to be maintained
    variant.ensure_runtime_present(ctx, Runtime::JavaCompiler)?;

    let requirements = config.requirements_path();
    variant.install_language_packages(ctx, config.accelerator, &requirements, config.nightly)?;

    Ok(())
}
