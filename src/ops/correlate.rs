//! Valid-mode 2-D cross-correlation ("convolution" without kernel flip).

use crate::core::traits::MatShape;
use crate::error::MatError;
use crate::matrix::Matrix;
use log::debug;

/// Slide `kernel` over `input` with unit stride and no padding.
///
/// The result has shape `(input.rows - kernel.rows + 1, input.cols - kernel.cols + 1)`
/// and `out[r][c] = Σ_{i,j} input[r+i][c+j] * kernel[i][j]`. The kernel is applied
/// unflipped. A kernel larger than the input in either dimension is an error.
pub fn correlate(input: &Matrix, kernel: &Matrix) -> Result<Matrix, MatError> {
    let too_large = || MatError::KernelTooLarge {
        input: input.shape(),
        kernel: kernel.shape(),
    };
    let out_rows = input
        .rows()
        .checked_sub(kernel.rows())
        .ok_or_else(too_large)?
        + 1;
    let out_cols = input
        .cols()
        .checked_sub(kernel.cols())
        .ok_or_else(too_large)?
        + 1;
    debug!(
        "correlate {:?} with kernel {:?} -> {out_rows}x{out_cols}",
        input.shape(),
        kernel.shape()
    );

    let mut out = Matrix::zeros(out_rows, out_cols)?;
    for r in 0..out_rows {
        for c in 0..out_cols {
            let mut sum = 0.0;
            for (i, krow) in kernel.rows_iter().enumerate() {
                let window = &input.row(r + i)[c..c + kernel.cols()];
                sum += window.iter().zip(krow).map(|(x, k)| x * k).sum::<f32>();
            }
            out[(r, c)] = sum;
        }
    }
    Ok(out)
}
