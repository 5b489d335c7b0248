//! macOS hosts: Homebrew.

use super::{InstallContext, OsKind, PlatformVariant};
use crate::error::{Result, ServeDepsError};
use crate::prerequisites::Runtime;
use crate::shell::{brew_version, sudo_prefix, CommandSpec, NOT_AVAILABLE};

/// Installs through Homebrew.
#[derive(Debug, Clone)]
pub struct MacOs {
    sudo: Option<&'static str>,
}

impl MacOs {
    /// Create the variant for the current user.
    pub fn new() -> Self {
        Self::with_sudo(sudo_prefix())
    }

    /// Create the variant with an explicit privilege prefix.
    pub fn with_sudo(sudo: Option<&'static str>) -> Self {
        Self { sudo }
    }

    fn brew_install(&self, ctx: &InstallContext<'_>, formula: &str) -> Result<()> {
        ctx.runner.run(&CommandSpec::new("brew").args(["install", formula]))
    }
}

impl Default for MacOs {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformVariant for MacOs {
    fn os(&self) -> OsKind {
        OsKind::MacOs
    }

    fn sudo(&self) -> Option<&str> {
        self.sudo
    }

    fn ensure_runtime_present(&self, ctx: &InstallContext<'_>, kind: Runtime) -> Result<()> {
        match kind {
            Runtime::JsRuntime => self.install_js_runtime(ctx),
            Runtime::DownloadUtility => {
                if ctx.needs_install(kind) {
                    ctx.output.step("Installing wget");
                    self.brew_install(ctx, "wget")?;
                }
                Ok(())
            }
            Runtime::JavaCompiler => {
                if !ctx.needs_install(kind) {
                    return Ok(());
                }
                let version = brew_version(ctx.runner);
                if version == NOT_AVAILABLE {
                    return Err(ServeDepsError::MissingPrerequisite {
                        requirement: "brew".to_string(),
                        message: "Homebrew not installed. Install it from https://brew.sh and re-run."
                            .to_string(),
                    });
                }
                tracing::debug!("Homebrew {}", version);

                let formula = format!("openjdk@{}", ctx.settings.jdk_version);
                ctx.output.step(&format!("Installing {}", formula));
                self.brew_install(ctx, &formula)
            }
        }
    }

    /// Pins the Node.js major by relinking the versioned formula.
    fn install_js_runtime(&self, ctx: &InstallContext<'_>) -> Result<()> {
        let formula = ctx.settings.node_formula();
        ctx.output.step(&format!("Installing {}", formula));

        // `brew unlink` fails when there is no node keg to unlink.
        if ctx.probe.is_present(Runtime::JsRuntime.binary()) {
            ctx.runner.run(&CommandSpec::new("brew").args(["unlink", "node"]))?;
        }
        self.brew_install(ctx, &formula)?;
        ctx.runner.run(
            &CommandSpec::new("brew")
                .args(["link", "--overwrite"])
                .arg(formula),
        )
    }

    /// Delegates to the repository's macOS npm script.
    fn install_js_tooling(&self, ctx: &InstallContext<'_>) -> Result<()> {
        ctx.output.step("Installing npm tools");
        let root = &ctx.config.project_root;
        let script = root.join(&ctx.settings.mac_npm_script);
        ctx.runner.run(
            &CommandSpec::elevated(self.sudo, script.to_string_lossy()).current_dir(root),
        )
    }
}
