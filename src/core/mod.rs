//! Core traits.

pub mod traits;
pub use traits::{MatShape, Pointwise};
