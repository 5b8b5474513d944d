//! Configuration for the matrix layer.

pub mod options;
pub use options::MatOptions;
