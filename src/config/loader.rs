//! Settings file discovery and loading.

use crate::config::settings::Settings;
use crate::error::{Result, ServeDepsError};
use std::fs;
use std::path::{Path, PathBuf};

/// Settings file location inside a project.
pub const PROJECT_SETTINGS: &str = ".servedeps/config.yml";

/// Find the project settings file at `.servedeps/config.yml`.
pub fn find_project_settings(project_root: &Path) -> Option<PathBuf> {
    let path = project_root.join(PROJECT_SETTINGS);
    if path.exists() {
        Some(path)
    } else {
        None
    }
}

/// Load settings for a run.
///
/// An explicit path must exist. Without one, the project settings file is
/// used when present and built-in defaults otherwise.
pub fn load_settings(project_root: &Path, explicit: Option<&Path>) -> Result<Settings> {
    let path = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(ServeDepsError::ConfigNotFound {
                    path: path.to_path_buf(),
                });
            }
            path.to_path_buf()
        }
        None => match find_project_settings(project_root) {
            Some(path) => path,
            None => {
                tracing::debug!("No settings file, using defaults");
                return Ok(Settings::default());
            }
        },
    };

    load_file(&path)
}

/// Parse a single settings file.
pub fn load_file(path: &Path) -> Result<Settings> {
    tracing::debug!("Loading settings from {}", path.display());
    let content = fs::read_to_string(path)?;

    // An empty file is valid and means "all defaults"
    if content.trim().is_empty() {
        return Ok(Settings::default());
    }

    serde_yaml::from_str(&content).map_err(|e| ServeDepsError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
