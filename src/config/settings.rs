//! Pinned versions, URLs and tool names.
//!
//! Every field has a default, so a settings file only needs the values it
//! overrides:
//!
//! ```yaml
//! python: /opt/conda/bin/python
//! node_major: 18
//! native_library:
//!   version: 1.7.1
//! ```

use serde::{Deserialize, Serialize};

/// Installer settings, loaded from YAML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Python interpreter whose `pip` receives the packages.
    pub python: String,

    /// JDK major version installed by the OS package manager.
    pub jdk_version: u32,

    /// Node.js major version.
    pub node_major: u32,

    /// NodeSource setup script for Debian-based hosts.
    pub nodesource_url: String,

    /// Base URL of the nightly torch package index; the CUDA tag is appended.
    pub nightly_index_url: String,

    /// Upgrade pip and setuptools before installing the requirements file.
    pub upgrade_pip: bool,

    /// Global npm tools for the test suite.
    pub npm_packages: Vec<String>,

    /// Script installing the npm tools on macOS, relative to the project root.
    pub mac_npm_script: String,

    /// Native library built from source on Linux developer hosts.
    pub native_library: NativeLibrary,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            python: default_python().to_string(),
            jdk_version: 17,
            node_major: 14,
            nodesource_url: "https://deb.nodesource.com/setup_14.x".to_string(),
            nightly_index_url: "https://download.pytorch.org/whl/nightly".to_string(),
            upgrade_pip: true,
            npm_packages: vec![
                "newman".to_string(),
                "newman-reporter-htmlextra".to_string(),
                "markdown-link-check".to_string(),
            ],
            mac_npm_script: "ts_scripts/mac_npm_deps".to_string(),
            native_library: NativeLibrary::default(),
        }
    }
}

impl Settings {
    /// Nightly index URL for a CUDA tag (or `cpu`).
    pub fn nightly_index_for(&self, tag: &str) -> String {
        format!("{}/{}", self.nightly_index_url.trim_end_matches('/'), tag)
    }

    /// The Homebrew formula for the pinned Node.js major.
    pub fn node_formula(&self) -> String {
        format!("node@{}", self.node_major)
    }
}

fn default_python() -> &'static str {
    if cfg!(windows) {
        "python"
    } else {
        "python3"
    }
}

/// A library downloaded as a source tarball and built with CMake.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NativeLibrary {
    /// Library name, also the prefix of the extracted directory.
    pub name: String,

    /// Release version.
    pub version: String,

    /// Tarball URL; `{version}` is substituted.
    pub url_template: String,
}

impl Default for NativeLibrary {
    fn default() -> Self {
        Self {
            name: "libgit2".to_string(),
            version: "1.3.0".to_string(),
            url_template: "https://github.com/libgit2/libgit2/archive/refs/tags/v{version}.tar.gz"
                .to_string(),
        }
    }
}

impl NativeLibrary {
    /// Directory the tarball extracts to, e.g. `libgit2-1.3.0`.
    pub fn dir_name(&self) -> String {
        format!("{}-{}", self.name, self.version)
    }

    /// Local file name of the downloaded tarball.
    pub fn tarball_name(&self) -> String {
        format!("{}.tar.gz", self.dir_name())
    }

    /// Download URL for the pinned version.
    pub fn url(&self) -> String {
        self.url_template.replace("{version}", &self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_pin_known_versions() {
        let settings = Settings::default();
        assert_eq!(settings.jdk_version, 17);
        assert_eq!(settings.node_formula(), "node@14");
        assert!(settings.upgrade_pip);
        assert_eq!(settings.npm_packages.len(), 3);
    }

    #[test]
    fn native_library_names_derive_from_version() {
        let lib = NativeLibrary::default();
        assert_eq!(lib.dir_name(), "libgit2-1.3.0");
        assert_eq!(lib.tarball_name(), "libgit2-1.3.0.tar.gz");
        assert_eq!(
            lib.url(),
            "https://github.com/libgit2/libgit2/archive/refs/tags/v1.3.0.tar.gz"
        );
    }

    #[test]
    fn nightly_index_appends_tag() {
        let settings = Settings {
            nightly_index_url: "https://example.com/whl/nightly/".to_string(),
            ..Default::default()
        };
        assert_eq!(
            settings.nightly_index_for("cu118"),
            "https://example.com/whl/nightly/cu118"
        );
    }

    #[test]
    fn partial_yaml_keeps_remaining_defaults() {
        let yaml = "node_major: 18\nnative_library:\n  version: 1.7.1\n";
        let settings: Settings = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(settings.node_formula(), "node@18");
        assert_eq!(settings.native_library.name, "libgit2");
        assert_eq!(settings.native_library.dir_name(), "libgit2-1.7.1");
        assert_eq!(settings.jdk_version, 17);
    }
}
