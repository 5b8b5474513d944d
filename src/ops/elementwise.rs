// Elementwise in-place arithmetic

use crate::error::MatError;
use crate::matrix::Matrix;
use crate::ops::ensure_same_shape;
use log::trace;

/// `dest += other`, position by position.
pub fn accumulate(dest: &mut Matrix, other: &Matrix) -> Result<(), MatError> {
    ensure_same_shape("accumulate", &*dest, other)?;
    trace!("accumulate {}x{}", dest.rows(), dest.cols());
    for r in 0..dest.rows() {
        for (d, s) in dest.row_mut(r).iter_mut().zip(other.row(r)) {
            *d += *s;
        }
    }
    Ok(())
}

/// Multiply every element by `factor`.
pub fn scale(mat: &mut Matrix, factor: f32) {
    trace!("scale {}x{} by {factor}", mat.rows(), mat.cols());
    mat.for_each_mut(|v| *v *= factor);
}

/// Overwrite `dest` with the elements of `src`.
///
/// The two matrices stay independent afterwards; only values are copied.
pub fn copy_into(dest: &mut Matrix, src: &Matrix) -> Result<(), MatError> {
    ensure_same_shape("copy_into", &*dest, src)?;
    for r in 0..dest.rows() {
        dest.row_mut(r).copy_from_slice(src.row(r));
    }
    Ok(())
}
