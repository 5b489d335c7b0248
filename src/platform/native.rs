//! Building a native library from a source tarball.

use super::InstallContext;
use crate::config::NativeLibrary;
use crate::error::Result;
use crate::shell::CommandSpec;

/// Download, extract, configure, build and install `library`.
///
/// Everything happens in a fresh directory under the scratch directory.
/// The directory is a [`tempfile::TempDir`], so the tarball and the
/// extracted sources are removed on every return path, including a failed
/// download or build.
pub fn build_from_source(
    ctx: &InstallContext<'_>,
    library: &NativeLibrary,
    sudo: Option<&str>,
) -> Result<()> {
    let build_dir = tempfile::Builder::new()
        .prefix(&library.dir_name())
        .tempdir_in(ctx.scratch_dir)?;
    let tarball = build_dir.path().join(library.tarball_name());
    let source_dir = build_dir.path().join(library.dir_name());

    ctx.output
        .step(&format!("Building {} {} from source", library.name, library.version));

    ctx.runner.run(
        &CommandSpec::new("wget")
            .arg(library.url())
            .arg("-O")
            .arg(tarball.to_string_lossy()),
    )?;
    ctx.runner.run(
        &CommandSpec::new("tar")
            .arg("-xzf")
            .arg(tarball.to_string_lossy())
            .arg("-C")
            .arg(build_dir.path().to_string_lossy()),
    )?;

    ctx.runner
        .run(&CommandSpec::new("cmake").arg(".").current_dir(&source_dir))?;
    ctx.runner
        .run(&CommandSpec::new("make").current_dir(&source_dir))?;
    ctx.runner.run(
        &CommandSpec::elevated(sudo, "make")
            .arg("install")
            .current_dir(&source_dir),
    )?;

    ctx.output
        .success(&format!("Installed {} {}", library.name, library.version));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{InstallConfig, Settings};
    use crate::fetch::DryRunFetcher;
    use crate::prerequisites::StaticProbe;
    use crate::shell::{CommandResult, CommandRunner, RecordingRunner};
    use crate::ui::{Output, OutputMode, Theme};
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    /// Records commands and leaves behind what `wget` and `tar` would.
    struct StagingRunner {
        inner: RecordingRunner,
        staged: std::cell::RefCell<Vec<PathBuf>>,
    }

    impl StagingRunner {
        fn new(inner: RecordingRunner) -> Self {
            Self {
                inner,
                staged: Default::default(),
            }
        }

        fn staged(&self) -> Vec<PathBuf> {
            self.staged.borrow().clone()
        }
    }

    impl CommandRunner for StagingRunner {
        fn run(&self, command: &CommandSpec) -> Result<()> {
            match command.program.as_str() {
                "wget" => {
                    let tarball = PathBuf::from(&command.args[2]);
                    fs::write(&tarball, b"partial download").unwrap();
                    self.staged.borrow_mut().push(tarball);
                }
                "tar" => {
                    let source_dir = Path::new(&command.args[3]).join("libgit2-1.3.0");
                    fs::create_dir_all(source_dir.join("src")).unwrap();
                    fs::write(source_dir.join("CMakeLists.txt"), "project(libgit2)").unwrap();
                    self.staged.borrow_mut().push(source_dir);
                }
                _ => {}
            }
            self.inner.run(command)
        }

        fn capture(&self, command: &CommandSpec) -> Result<CommandResult> {
            self.inner.capture(command)
        }
    }

    fn build(runner: &dyn CommandRunner, scratch: &Path) -> Result<()> {
        let config = InstallConfig::new(".");
        let settings = Settings::default();
        let probe = StaticProbe::empty();
        let output = Output::with_theme(OutputMode::Quiet, Theme::plain());
        let ctx = InstallContext {
            config: &config,
            settings: &settings,
            runner,
            probe: &probe,
            fetcher: &DryRunFetcher,
            output: &output,
            scratch_dir: scratch,
        };
        build_from_source(&ctx, &settings.native_library, Some("sudo"))
    }

    fn is_empty(dir: &Path) -> bool {
        fs::read_dir(dir).unwrap().next().is_none()
    }

    #[test]
    fn build_runs_steps_in_source_directory() {
        let temp = TempDir::new().unwrap();
        let runner = RecordingRunner::new();

        build(&runner, temp.path()).unwrap();

        let commands = runner.commands();
        let programs: Vec<&str> = commands.iter().map(|c| c.program.as_str()).collect();
        assert_eq!(programs, vec!["wget", "tar", "cmake", "make", "sudo"]);

        let source_dir = commands[2].cwd.clone().unwrap();
        assert!(source_dir.ends_with("libgit2-1.3.0"));
        let build_dir = source_dir.parent().unwrap();
        assert_eq!(build_dir.parent(), Some(temp.path()));
        assert_eq!(commands[1].args[3], build_dir.to_string_lossy());
        assert_eq!(commands[4].args, vec!["make", "install"]);
        assert!(commands[0].mentions(
            "https://github.com/libgit2/libgit2/archive/refs/tags/v1.3.0.tar.gz"
        ));
    }

    #[test]
    fn cleanup_after_successful_build() {
        let temp = TempDir::new().unwrap();
        let runner = StagingRunner::new(RecordingRunner::new());

        build(&runner, temp.path()).unwrap();

        assert_eq!(runner.staged().len(), 2);
        assert!(runner.staged().iter().all(|p| !p.exists()));
        assert!(is_empty(temp.path()));
    }

    #[test]
    fn cleanup_when_build_fails() {
        let temp = TempDir::new().unwrap();
        let runner = StagingRunner::new(RecordingRunner::new().fail_on("make", 2));

        let err = build(&runner, temp.path()).unwrap_err();

        assert_eq!(err.exit_code(), 2);
        let staged = runner.staged();
        assert_eq!(staged.len(), 2);
        assert!(!staged[0].exists(), "tarball left behind");
        assert!(!staged[1].exists(), "sources left behind");
        assert!(is_empty(temp.path()));
        // cmake ran, make failed, install never started
        assert_eq!(runner.inner.commands().len(), 4);
    }

    #[test]
    fn cleanup_when_download_fails() {
        let temp = TempDir::new().unwrap();
        let runner = StagingRunner::new(RecordingRunner::new().fail_on("wget", 4));

        assert!(build(&runner, temp.path()).is_err());
        assert!(!runner.staged()[0].exists());
        assert!(is_empty(temp.path()));
        assert_eq!(runner.inner.commands().len(), 1);
    }
}
