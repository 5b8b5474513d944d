//! Matrix products.
//!
//! `dot` writes `a · b` into a caller-supplied destination, `matmul` allocates
//! one, and `chain_multiply` folds `dot` into freshly allocated destinations
//! over an ordered sequence of operands from the left. With the `rayon` feature destination rows are computed in
//! parallel; each element is summed over `k` in ascending order either way, so
//! the serial and parallel paths agree bit for bit.

use crate::core::traits::MatShape;
use crate::error::MatError;
use crate::matrix::Matrix;
use log::debug;

fn ensure_inner(op: &'static str, a: &Matrix, b: &Matrix) -> Result<(), MatError> {
    if a.cols() != b.rows() {
        return Err(MatError::InnerDimMismatch {
            op,
            left_cols: a.cols(),
            right_rows: b.rows(),
        });
    }
    Ok(())
}

/// One destination row: `out[j] = Σ_k a_row[k] * b[k][j]`.
fn row_product(out: &mut [f32], a_row: &[f32], b: &Matrix) {
    out.fill(0.0);
    for (k, &aik) in a_row.iter().enumerate() {
        for (o, &bkj) in out.iter_mut().zip(b.row(k)) {
            *o += aik * bkj;
        }
    }
}

/// Compute `dest = a · b`, overwriting every element of `dest`.
///
/// Requires `a.cols == b.rows` and `dest` shaped `(a.rows, b.cols)`. Prior
/// contents of `dest` never contribute to the result.
pub fn dot(dest: &mut Matrix, a: &Matrix, b: &Matrix) -> Result<(), MatError> {
    ensure_inner("dot", a, b)?;
    let expected = (a.rows(), b.cols());
    if dest.shape() != expected {
        return Err(MatError::ShapeMismatch {
            op: "dot",
            expected,
            got: dest.shape(),
        });
    }
    let cols = dest.cols();
    let stride = dest.stride();
    #[cfg(feature = "rayon")]
    {
        use rayon::prelude::*;
        dest.as_mut_slice()
            .par_chunks_mut(stride)
            .enumerate()
            .for_each(|(i, row)| row_product(&mut row[..cols], a.row(i), b));
    }
    #[cfg(not(feature = "rayon"))]
    {
        dest.as_mut_slice()
            .chunks_mut(stride)
            .enumerate()
            .for_each(|(i, row)| row_product(&mut row[..cols], a.row(i), b));
    }
    Ok(())
}

/// Allocate and return `a · b`.
pub fn matmul(a: &Matrix, b: &Matrix) -> Result<Matrix, MatError> {
    ensure_inner("matmul", a, b)?;
    let mut dest = Matrix::zeros(a.rows(), b.cols())?;
    dot(&mut dest, a, b)?;
    Ok(dest)
}

/// Left-to-right product `((m0 · m1) · m2) · …` of two or more operands.
///
/// Each step allocates a fresh result which becomes the left operand of the
/// next step; the previous intermediate is dropped as soon as it has been
/// consumed. Fewer than two operands is rejected with `DegenerateChain`, and
/// the first adjacent pair with differing inner dimensions stops the chain.
pub fn chain_multiply<'a, I>(operands: I) -> Result<Matrix, MatError>
where
    I: IntoIterator<Item = &'a Matrix>,
{
    let mut iter = operands.into_iter();
    let first = iter.next().ok_or(MatError::DegenerateChain(0))?;
    let second = iter.next().ok_or(MatError::DegenerateChain(1))?;
    let head = chain_step(1, first, second)?;
    iter.enumerate()
        .try_fold(head, |acc, (i, next)| chain_step(i + 2, &acc, next))
}

fn chain_step(step: usize, left: &Matrix, right: &Matrix) -> Result<Matrix, MatError> {
    debug!(
        "chain step {step}: {:?} x {:?} -> {:?}",
        left.shape(),
        right.shape(),
        (left.rows(), right.cols())
    );
    let mut dest = Matrix::zeros(left.rows(), right.cols())?;
    dot(&mut dest, left, right).map_err(|e| match e {
        MatError::InnerDimMismatch {
            left_cols,
            right_rows,
            ..
        } => MatError::InnerDimMismatch {
            op: "chain_multiply",
            left_cols,
            right_rows,
        },
        other => other,
    })?;
    Ok(dest)
}
