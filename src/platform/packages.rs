//! Python package installation.

use super::{InstallContext, OsKind};
use crate::config::CudaVariant;
use crate::error::{Result, ServeDepsError};
use crate::shell::CommandSpec;
use std::path::Path;

/// Packages reinstalled from the nightly index.
const NIGHTLY_PACKAGES: &[&str] = &[
    "numpy",
    "--pre",
    "torch[dynamo]",
    "torchvision",
    "torchtext",
    "torchaudio",
];

/// Reject accelerator builds that have no published torch wheels.
///
/// Only the two known gaps are checked; any other combination is passed
/// through to pip.
pub fn check_accelerator_support(os: OsKind, accelerator: Option<CudaVariant>) -> Result<()> {
    match (os, accelerator) {
        (OsKind::MacOs, Some(_)) => Err(ServeDepsError::UnsupportedPlatformCombination {
            message: "CUDA not supported on MacOS. Refer https://pytorch.org/ for installing from source."
                .to_string(),
        }),
        (OsKind::Windows, Some(CudaVariant::Cu92)) => {
            Err(ServeDepsError::UnsupportedPlatformCombination {
                message: "CUDA 9.2 not supported on Windows. Refer https://pytorch.org/ for installing from source."
                    .to_string(),
            })
        }
        _ => Ok(()),
    }
}

/// Torch requirements file for a platform, relative to the project root.
pub fn torch_requirements_file(os: OsKind, accelerator: Option<CudaVariant>) -> String {
    match accelerator {
        Some(cuda) => format!("requirements/torch_{}_{}.txt", cuda.tag(), os.system_name()),
        None => format!("requirements/torch_{}.txt", os.system_name()),
    }
}

fn pip(ctx: &InstallContext<'_>) -> CommandSpec {
    CommandSpec::new(&ctx.settings.python).args(["-m", "pip"])
}

fn path_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Install torch for the platform, then the requirements file.
///
/// The accelerator check runs before anything is invoked. When conda is
/// available, `conda-build` goes in first, because conda may otherwise
/// replace pip-installed packages with different versions afterwards.
pub fn install_language_packages(
    ctx: &InstallContext<'_>,
    os: OsKind,
    accelerator: Option<CudaVariant>,
    requirements: &Path,
    nightly: bool,
) -> Result<()> {
    check_accelerator_support(os, accelerator)?;

    if ctx.probe.is_present("conda") {
        ctx.output.step("Installing conda-build");
        ctx.runner
            .run(&CommandSpec::new("conda").args(["install", "-y", "conda-build"]))?;
    }

    let torch = ctx
        .config
        .project_root
        .join(torch_requirements_file(os, accelerator));
    ctx.output.step(&format!(
        "Installing torch ({})",
        accelerator.map_or("cpu", |c| c.tag())
    ));
    ctx.runner
        .run(&pip(ctx).args(["install", "-U", "-r"]).arg(path_arg(&torch)))?;

    if ctx.settings.upgrade_pip {
        ctx.runner
            .run(&pip(ctx).args(["install", "-U", "pip", "setuptools"]))?;
    }

    ctx.output.step(&format!(
        "Installing Python requirements from {}",
        requirements.display()
    ));
    ctx.runner
        .run(&pip(ctx).args(["install", "-U", "-r"]).arg(path_arg(requirements)))?;

    // Installs torch a second time; the requirements files pin the stable build.
    if nightly {
        let tag = accelerator.map_or("cpu", |c| c.tag());
        ctx.output.step("Installing nightly torch packages");
        ctx.runner.run(
            &pip(ctx)
                .arg("install")
                .args(NIGHTLY_PACKAGES.iter().copied())
                .args(["--force-reinstall", "--extra-index-url"])
                .arg(ctx.settings.nightly_index_for(tag)),
        )?;
    }

    Ok(())
}
