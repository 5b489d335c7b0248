//! Search-path probing for required binaries.
//!
//! Installation steps ask a [`BinaryProbe`] whether a tool is already
//! available instead of consulting the environment themselves, so tests
//! can simulate any host.
//!
//! # Example
//!
//! ```no_run
//! use servedeps::prerequisites::probe::{BinaryProbe, SystemPathProbe};
//!
//! let probe = SystemPathProbe::from_env();
//! if let Some(javac) = probe.locate("javac") {
//!     println!("javac at {}", javac.display());
//! }
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Answers "is this binary on the search path?".
pub trait BinaryProbe {
    /// Full path of `binary` if it is on the search path.
    fn locate(&self, binary: &str) -> Option<PathBuf>;

    /// Whether `binary` is on the search path.
    fn is_present(&self, binary: &str) -> bool {
        self.locate(binary).is_some()
    }
}

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// File names a tool may have on disk.
fn candidate_names(tool: &str) -> Vec<String> {
    if cfg!(windows) && Path::new(tool).extension().is_none() {
        ["exe", "cmd", "bat"]
            .iter()
            .map(|ext| format!("{}.{}", tool, ext))
            .collect()
    } else {
        vec![tool.to_string()]
    }
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable. Does NOT use
/// the `which` command, whose behavior varies across systems.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    let names = candidate_names(tool);
    for dir in path_entries {
        for name in &names {
            let candidate = dir.join(name);
            if candidate.is_file() && is_executable(&candidate) {
                return Some(candidate);
            }
        }
    }
    None
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Probe backed by the PATH of the running process.
#[derive(Debug, Clone)]
pub struct SystemPathProbe {
    entries: Vec<PathBuf>,
}

impl SystemPathProbe {
    /// Snapshot the current PATH.
    pub fn from_env() -> Self {
        Self::with_entries(parse_system_path())
    }

    /// Probe an explicit list of directories.
    pub fn with_entries(entries: Vec<PathBuf>) -> Self {
        Self { entries }
    }
}

impl BinaryProbe for SystemPathProbe {
    fn locate(&self, binary: &str) -> Option<PathBuf> {
        resolve_tool_path(binary, &self.entries)
    }
}

/// Probe answering from a fixed set of binary names.
#[derive(Debug, Clone, Default)]
pub struct StaticProbe {
    present: HashSet<String>,
}

impl StaticProbe {
    /// A host where nothing is installed.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A host where exactly `binaries` are installed.
    pub fn with<I, S>(binaries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            present: binaries.into_iter().map(Into::into).collect(),
        }
    }
}

impl BinaryProbe for StaticProbe {
    fn locate(&self, binary: &str) -> Option<PathBuf> {
        self.present
            .contains(binary)
            .then(|| PathBuf::from("/usr/bin").join(binary))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    /// Create a fake binary at a path (creates parent dirs as needed).
    fn create_fake_binary(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "#!/bin/sh\n").unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
        }
    }

    #[cfg(unix)]
    fn create_non_executable_file(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "not executable").unwrap();
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o644)).unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn resolve_tool_path_finds_first_match() {
        let temp = TempDir::new().unwrap();
        let dir_a = temp.path().join("a");
        let dir_b = temp.path().join("b");

        create_fake_binary(&dir_a.join("javac"));
        create_fake_binary(&dir_b.join("javac"));

        let result = resolve_tool_path("javac", &[dir_a.clone(), dir_b.clone()]);
        assert_eq!(result, Some(dir_a.join("javac")));
    }

    #[test]
    fn resolve_tool_path_returns_none_when_not_found() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("empty");
        fs::create_dir_all(&dir).unwrap();

        assert!(resolve_tool_path("javac", &[dir]).is_none());
    }

    #[cfg(unix)]
    #[test]
    fn resolve_tool_path_skips_non_executable() {
        let temp = TempDir::new().unwrap();
        let dir_a = temp.path().join("a");
        let dir_b = temp.path().join("b");

        create_non_executable_file(&dir_a.join("node"));
        create_fake_binary(&dir_b.join("node"));

        let result = resolve_tool_path("node", &[dir_a.clone(), dir_b.clone()]);
        assert_eq!(result, Some(dir_b.join("node")));
    }

    #[test]
    fn is_executable_returns_false_for_nonexistent_file() {
        assert!(!is_executable(Path::new("/nonexistent/path/to/file")));
    }

    #[cfg(unix)]
    #[test]
    fn system_path_probe_uses_given_entries() {
        let temp = TempDir::new().unwrap();
        create_fake_binary(&temp.path().join("bin/wget"));

        let probe = SystemPathProbe::with_entries(vec![temp.path().join("bin")]);
        assert!(probe.is_present("wget"));
        assert!(!probe.is_present("conda"));
    }

    #[test]
    fn static_probe_reports_configured_binaries() {
        let probe = StaticProbe::with(["javac", "node"]);
        assert!(probe.is_present("javac"));
        assert!(probe.is_present("node"));
        assert!(!probe.is_present("conda"));
        assert!(!StaticProbe::empty().is_present("javac"));
    }
}
