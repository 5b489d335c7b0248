//! Prerequisite detection.
//!
//! # Modules
//!
//! - [`probe`] - Search-path probing for required binaries
//! - [`runtime`] - The runtimes and tools the installer ensures

pub mod probe;
pub mod runtime;

pub use probe::{BinaryProbe, StaticProbe, SystemPathProbe};
pub use runtime::Runtime;
