//! Dependencies shared by every installation step.

use crate::config::{InstallConfig, Settings};
use crate::fetch::Fetch;
use crate::prerequisites::{BinaryProbe, Runtime};
use crate::shell::CommandRunner;
use crate::ui::Output;
use std::path::Path;

/// Everything an installation step reads or acts through.
///
/// Steps never touch the environment directly; tests substitute the
/// runner, probe and fetcher to simulate a host.
pub struct InstallContext<'a> {
    /// Options for this run.
    pub config: &'a InstallConfig,
    /// Pinned versions and URLs.
    pub settings: &'a Settings,
    /// Executes external tools.
    pub runner: &'a dyn CommandRunner,
    /// Answers search-path lookups.
    pub probe: &'a dyn BinaryProbe,
    /// Downloads setup scripts.
    pub fetcher: &'a dyn Fetch,
    /// User-facing output.
    pub output: &'a Output,
    /// Directory for downloads and source builds.
    pub scratch_dir: &'a Path,
}

impl InstallContext<'_> {
    /// Whether `kind` has to be (re)installed.
    ///
    /// True when the binary is missing, or present but `--force` was given.
    pub fn needs_install(&self, kind: Runtime) -> bool {
        match self.probe.locate(kind.binary()) {
            None => {
                tracing::debug!("{} not found on PATH", kind);
                true
            }
            Some(path) if self.config.force => {
                tracing::debug!("Reinstalling {} at {} (--force)", kind, path.display());
                true
            }
            Some(path) => {
                self.output
                    .skipped(&format!("{} already installed at {}", kind, path.display()));
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::DryRunFetcher;
    use crate::prerequisites::StaticProbe;
    use crate::shell::RecordingRunner;
    use crate::ui::{OutputMode, Theme};

    fn check(present: &[&str], force: bool, kind: Runtime) -> bool {
        let mut config = InstallConfig::new(".");
        config.force = force;
        let settings = Settings::default();
        let runner = RecordingRunner::new();
        let probe = StaticProbe::with(present.iter().copied());
        let output = Output::with_theme(OutputMode::Quiet, Theme::plain());
        let ctx = InstallContext {
            config: &config,
            settings: &settings,
            runner: &runner,
            probe: &probe,
            fetcher: &DryRunFetcher,
            output: &output,
            scratch_dir: Path::new("."),
        };
        ctx.needs_install(kind)
    }

    #[test]
    fn missing_binary_needs_install() {
        assert!(check(&[], false, Runtime::JavaCompiler));
    }

    #[test]
    fn present_binary_short_circuits() {
        assert!(!check(&["javac"], false, Runtime::JavaCompiler));
    }

    #[test]
    fn force_reinstalls_present_binary() {
        assert!(check(&["javac"], true, Runtime::JavaCompiler));
    }
}
