//! Terminal output.
//!
//! This module provides:
//! - [`Output`] for step, status and command echo lines
//! - [`ProgressSpinner`] for downloads
//! - [`Theme`] for consistent styling
//!
//! # Example
//!
//! ```
//! use servedeps::ui::{Output, OutputMode};
//!
//! let output = Output::new(OutputMode::Quiet);
//! output.step("Installing wget");
//! output.success("Dependencies installed");
//! ```

pub mod output;
pub mod spinner;
pub mod theme;

pub use output::{Output, OutputMode};
pub use spinner::ProgressSpinner;
pub use theme::{should_use_colors, Theme};
