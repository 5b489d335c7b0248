//! Runtimes and tools the installer makes sure are present.

use std::fmt;

/// A prerequisite identified by the binary it puts on the search path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Runtime {
    /// `wget`, used to fetch native library sources.
    DownloadUtility,
    /// `node`, needed by the JS test tooling.
    JsRuntime,
    /// `javac` from a JDK; the server frontend is built with it.
    JavaCompiler,
}

impl Runtime {
    /// The binary probed on the search path.
    pub fn binary(&self) -> &'static str {
        match self {
            Runtime::DownloadUtility => "wget",
            Runtime::JsRuntime => "node",
            Runtime::JavaCompiler => "javac",
        }
    }
}

impl fmt::Display for Runtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.binary())
    }
}
