//! Arithmetic on [`Matrix`](crate::matrix::Matrix) values.
//!
//! Destinations are taken as `&mut Matrix` and operands as `&Matrix`, so a
//! destination can never alias one of its operands. Shape preconditions are
//! checked up front and reported as [`MatError`] before anything is written.

use crate::core::traits::MatShape;
use crate::error::MatError;

pub mod correlate;
pub mod elementwise;
pub mod linalg;
pub mod pointwise;

pub use correlate::correlate;
pub use elementwise::{accumulate, copy_into, scale};
pub use linalg::{chain_multiply, dot, matmul};
pub use pointwise::{apply_activation, apply_pointwise};

/// Fails with `ShapeMismatch` unless `dest` and `src` have the same shape.
pub(crate) fn ensure_same_shape<A, B>(op: &'static str, dest: &A, src: &B) -> Result<(), MatError>
where
    A: MatShape + ?Sized,
    B: MatShape + ?Sized,
{
    if dest.shape() != src.shape() {
        return Err(MatError::ShapeMismatch {
            op,
            expected: dest.shape(),
            got: src.shape(),
        });
    }
    Ok(())
}
