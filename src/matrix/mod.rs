//! Matrix module: the dense row-major matrix type and its constructors.

pub mod dense;
pub use dense::Matrix;
pub mod random;
pub use random::{random_uniform, random_uniform_with, seed_shared};
