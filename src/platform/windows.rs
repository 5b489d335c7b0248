//! Windows hosts.
//!
//! There is no system package manager to drive, so the JDK, Node.js and
//! wget are expected to be provisioned beforehand. Only the JDK is
//! checked, since the build fails without it.

use super::{InstallContext, OsKind, PlatformVariant};
use crate::error::{Result, ServeDepsError};
use crate::prerequisites::Runtime;

/// Variant for Windows; never elevates.
#[derive(Debug, Clone, Default)]
pub struct Windows;

impl Windows {
    /// Create the variant.
    pub fn new() -> Self {
        Self
    }
}

impl PlatformVariant for Windows {
    fn os(&self) -> OsKind {
        OsKind::Windows
    }

    fn sudo(&self) -> Option<&str> {
        None
    }

    fn ensure_runtime_present(&self, ctx: &InstallContext<'_>, kind: Runtime) -> Result<()> {
        match kind {
            Runtime::JavaCompiler => match ctx.probe.locate(kind.binary()) {
                Some(path) => {
                    if ctx.config.force {
                        ctx.output.warning(&format!(
                            "No automated JDK install on Windows; keeping {}",
                            path.display()
                        ));
                    }
                    Ok(())
                }
                None => Err(ServeDepsError::MissingPrerequisite {
                    requirement: kind.binary().to_string(),
                    message: format!(
                        "javac not found on PATH. Please install JDK {} appropriate for your operating system.",
                        ctx.settings.jdk_version
                    ),
                }),
            },
            Runtime::DownloadUtility | Runtime::JsRuntime => {
                tracing::debug!("{} is provisioned externally on Windows", kind);
                Ok(())
            }
        }
    }

    fn install_js_runtime(&self, _ctx: &InstallContext<'_>) -> Result<()> {
        tracing::debug!("Node.js is provisioned externally on Windows");
        Ok(())
    }
}
