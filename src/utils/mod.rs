//! Diagnostics helpers.

pub mod format;
pub use format::{format, format_with};
