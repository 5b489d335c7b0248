//! Error types for servedeps operations.
//!
//! This module defines [`ServeDepsError`], the primary error type used
//! throughout the installer, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Every failure is terminal for the whole run; nothing is retried
//! - External tool failures carry the tool's exit code so `main` can
//!   propagate it
//! - Use `anyhow::Error` (via `ServeDepsError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for servedeps operations.
#[derive(Debug, Error)]
pub enum ServeDepsError {
    /// The requested accelerator build is not available on this platform.
    #[error("{message}")]
    UnsupportedPlatformCombination { message: String },

    /// A prerequisite is missing and has to be installed by hand.
    #[error("Missing prerequisite '{requirement}': {message}")]
    MissingPrerequisite {
        requirement: String,
        message: String,
    },

    /// An external tool exited unsuccessfully (or could not be started).
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// A download over HTTPS failed.
    #[error("Failed to download {url}: {message}")]
    DownloadFailed { url: String, message: String },

    /// Settings file not found at an explicitly requested location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse the settings file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ServeDepsError {
    /// Process exit code for this error.
    ///
    /// A failing tool's own exit code is passed through; everything else
    /// exits with 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::CommandFailed {
                code: Some(code), ..
            } => u8::try_from(*code).ok().filter(|c| *c != 0).unwrap_or(1),
            _ => 1,
        }
    }
}

/// Result type alias for servedeps operations.
pub type Result<T> = std::result::Result<T, ServeDepsError>;
