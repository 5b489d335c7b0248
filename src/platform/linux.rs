//! Debian/Ubuntu hosts: apt-get and NodeSource.

use super::{native, InstallContext, OsKind, PlatformVariant};
use crate::config::NativeLibrary;
use crate::error::Result;
use crate::prerequisites::Runtime;
use crate::shell::{sudo_prefix, CommandSpec};
use std::io::Write;

/// Installs through apt-get, with `sudo` unless running as root.
#[derive(Debug, Clone)]
pub struct Linux {
    sudo: Option<&'static str>,
}

impl Linux {
    /// Create the variant for the current user.
    pub fn new() -> Self {
        Self::with_sudo(sudo_prefix())
    }

    /// Create the variant with an explicit privilege prefix.
    pub fn with_sudo(sudo: Option<&'static str>) -> Self {
        Self { sudo }
    }

    fn apt_get(&self) -> CommandSpec {
        CommandSpec::elevated(self.sudo, "apt-get")
    }

    fn apt_install(&self, ctx: &InstallContext<'_>, package: &str) -> Result<()> {
        ctx.runner.run(&self.apt_get().args(["install", "-y", package]))
    }
}

impl Default for Linux {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformVariant for Linux {
    fn os(&self) -> OsKind {
        OsKind::Linux
    }

    fn sudo(&self) -> Option<&str> {
        self.sudo
    }

    fn prepare(&self, ctx: &InstallContext<'_>) -> Result<()> {
        if ctx.config.force {
            ctx.output.step("Refreshing apt package index");
            ctx.runner.run(&self.apt_get().arg("update"))?;
        }
        Ok(())
    }

    fn ensure_runtime_present(&self, ctx: &InstallContext<'_>, kind: Runtime) -> Result<()> {
        match kind {
            Runtime::JsRuntime => self.install_js_runtime(ctx),
            Runtime::DownloadUtility => {
                if ctx.needs_install(kind) {
                    ctx.output.step("Installing wget");
                    self.apt_install(ctx, "wget")?;
                }
                Ok(())
            }
            Runtime::JavaCompiler => {
                if ctx.needs_install(kind) {
                    let package = format!("openjdk-{}-jdk", ctx.settings.jdk_version);
                    ctx.output.step(&format!("Installing {}", package));
                    self.apt_install(ctx, &package)?;
                }
                Ok(())
            }
        }
    }

    fn install_js_runtime(&self, ctx: &InstallContext<'_>) -> Result<()> {
        if !ctx.needs_install(Runtime::JsRuntime) {
            return Ok(());
        }

        ctx.output.step(&format!(
            "Installing Node.js {} from NodeSource",
            ctx.settings.node_major
        ));

        let url = &ctx.settings.nodesource_url;
        let spinner = ctx.output.spinner(&format!("Downloading {}", url));
        let script = match ctx.fetcher.fetch(url) {
            Ok(body) => {
                spinner.finish_success(&format!("Downloaded {}", url));
                body
            }
            Err(e) => {
                spinner.finish_error(&format!("Download failed: {}", url));
                return Err(e);
            }
        };

        // Kept open until bash has run; removed on drop.
        let mut setup = tempfile::Builder::new()
            .prefix("nodesource-setup")
            .suffix(".sh")
            .tempfile_in(ctx.scratch_dir)?;
        setup.write_all(&script)?;
        setup.flush()?;

        ctx.runner.run(
            &CommandSpec::elevated(self.sudo, "bash").arg(setup.path().to_string_lossy()),
        )?;
        self.apt_install(ctx, "nodejs")
    }

    fn install_native_library(
        &self,
        ctx: &InstallContext<'_>,
        library: &NativeLibrary,
    ) -> Result<()> {
        native::build_from_source(ctx, library, self.sudo)
    }
}
