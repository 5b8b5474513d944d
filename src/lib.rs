//! densemat: row-major dense matrices for small feed-forward networks
//!
//! This crate provides an `f32` matrix value type with an explicit row stride and the
//! handful of operations a forward/backward pass needs: construction, elementwise
//! accumulation and scaling, deep copy, matrix products (pairwise and chained), valid-mode
//! 2-D correlation and pointwise activation. Every precondition is checked and reported
//! through [`MatError`]; nothing is written to a destination when a check fails.

#[cfg(feature = "rayon")]
pub mod parallel;

pub mod activation;
pub mod config;
pub mod core;
pub mod error;
pub mod matrix;
pub mod ops;
pub mod utils;

// Re-exports for convenience
pub use activation::*;
pub use config::*;
pub use self::core::*;
pub use error::*;
pub use matrix::*;
pub use ops::*;
pub use utils::*;
