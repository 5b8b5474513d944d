//! Dense row-major matrix type.
//!
//! A `Matrix` owns a flat `f32` buffer of `rows * stride` elements, addressed as
//! `buffer[row * stride + col]`. Every constructor allocates a fresh zeroed buffer
//! sized to the requested shape and sets `stride == cols` unless asked otherwise.
//! The buffer is released when the matrix is dropped, or handed back to the caller
//! with [`Matrix::into_vec`].

use crate::core::traits::MatShape;
use crate::error::MatError;
use faer::Mat;
use log::debug;
use std::ops::{Index, IndexMut};

/// Row-major dense matrix of `f32` with an explicit row stride.
#[derive(Clone, Debug)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    stride: usize,
    data: Vec<f32>,
}

impl Matrix {
    /// Allocate a `rows x cols` zero matrix with `stride == cols`.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self, MatError> {
        Self::with_stride(rows, cols, cols)
    }

    /// Allocate a zero matrix whose consecutive rows start `stride` elements apart.
    ///
    /// Padding elements between `cols` and `stride` are never read by any operation.
    pub fn with_stride(rows: usize, cols: usize, stride: usize) -> Result<Self, MatError> {
        if rows == 0 || cols == 0 {
            return Err(MatError::ZeroDimension { rows, cols });
        }
        if stride < cols {
            return Err(MatError::InvalidStride { cols, stride });
        }
        let len = rows
            .checked_mul(stride)
            .filter(|&n| n <= isize::MAX as usize / std::mem::size_of::<f32>())
            .ok_or(MatError::Overflow { rows, stride })?;
        debug!("allocating {rows}x{cols} matrix (stride {stride})");
        Ok(Self {
            rows,
            cols,
            stride,
            data: vec![0.0; len],
        })
    }

    /// Allocate a `rows x cols` matrix and, when `source` is given, copy its first
    /// `rows * cols` elements in row-major order. Without a source the matrix stays zeroed.
    pub fn from_buffer(rows: usize, cols: usize, source: Option<&[f32]>) -> Result<Self, MatError> {
        let mut mat = Self::zeros(rows, cols)?;
        if let Some(src) = source {
            let need = rows * cols;
            if src.len() < need {
                return Err(MatError::BufferTooShort { need, got: src.len() });
            }
            for (row, chunk) in src[..need].chunks_exact(cols).enumerate() {
                mat.row_mut(row).copy_from_slice(chunk);
            }
        }
        Ok(mat)
    }

    /// Build from a slice of equally long rows.
    pub fn from_rows(rows: &[&[f32]]) -> Result<Self, MatError> {
        let cols = rows.first().map_or(0, |r| r.len());
        let mut mat = Self::zeros(rows.len(), cols)?;
        for (i, src) in rows.iter().enumerate() {
            if src.len() != cols {
                return Err(MatError::ShapeMismatch {
                    op: "from_rows",
                    expected: (1, cols),
                    got: (1, src.len()),
                });
            }
            mat.row_mut(i).copy_from_slice(src);
        }
        Ok(mat)
    }

    /// `size x size` identity.
    pub fn identity(size: usize) -> Result<Self, MatError> {
        let mut mat = Self::zeros(size, size)?;
        for i in 0..size {
            mat[(i, i)] = 1.0;
        }
        Ok(mat)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Distance in elements between the starts of consecutive rows.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Checked element access.
    pub fn get(&self, row: usize, col: usize) -> Option<f32> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.stride + col])
        } else {
            None
        }
    }

    /// The `cols` logical elements of row `row`.
    pub fn row(&self, row: usize) -> &[f32] {
        let start = row * self.stride;
        &self.data[start..start + self.cols]
    }

    pub fn row_mut(&mut self, row: usize) -> &mut [f32] {
        let start = row * self.stride;
        &mut self.data[start..start + self.cols]
    }

    pub fn rows_iter(&self) -> impl Iterator<Item = &[f32]> {
        (0..self.rows).map(move |r| self.row(r))
    }

    /// Apply `f` to every logical element in place.
    pub(crate) fn for_each_mut(&mut self, mut f: impl FnMut(&mut f32)) {
        let cols = self.cols;
        for chunk in self.data.chunks_mut(self.stride) {
            chunk[..cols].iter_mut().for_each(&mut f);
        }
    }

    /// Logical elements in row-major order, padding excluded.
    pub fn to_vec(&self) -> Vec<f32> {
        self.rows_iter().flatten().copied().collect()
    }

    /// Raw backing buffer, padding included.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Release the matrix, handing its backing buffer to the caller.
    pub fn into_vec(self) -> Vec<f32> {
        self.data
    }

    /// Copy into a column-major faer matrix.
    pub fn to_faer(&self) -> Mat<f32> {
        Mat::from_fn(self.rows, self.cols, |i, j| self[(i, j)])
    }

    /// Copy out of a faer matrix.
    pub fn from_faer(m: &Mat<f32>) -> Result<Self, MatError> {
        let (rows, cols) = MatShape::shape(m);
        let mut mat = Self::zeros(rows, cols)?;
        for i in 0..rows {
            for (j, v) in mat.row_mut(i).iter_mut().enumerate() {
                *v = m[(i, j)];
            }
        }
        Ok(mat)
    }
}

/// Equal when shapes and logical elements match; stride and padding are ignored.
impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        self.shape() == other.shape() && self.rows_iter().eq(other.rows_iter())
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f32;

    fn index(&self, (row, col): (usize, usize)) -> &f32 {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of range for {}x{} matrix",
            self.rows,
            self.cols
        );
        &self.data[row * self.stride + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f32 {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of range for {}x{} matrix",
            self.rows,
            self.cols
        );
        &mut self.data[row * self.stride + col]
    }
}

impl MatShape for Matrix {
    fn nrows(&self) -> usize {
        self.rows
    }
    fn ncols(&self) -> usize {
        self.cols
    }
}

impl MatShape for Mat<f32> {
    fn nrows(&self) -> usize {
        self.nrows()
    }
    fn ncols(&self) -> usize {
        self.ncols()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeros_is_zero_filled_with_packed_stride() {
        let m = Matrix::zeros(2, 3).unwrap();
        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m.stride(), 3);
        assert!(m.as_slice().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn zero_dimension_rejected() {
        assert_eq!(
            Matrix::zeros(0, 4),
            Err(MatError::ZeroDimension { rows: 0, cols: 4 })
        );
        assert!(Matrix::identity(0).is_err());
    }

    #[test]
    fn overflowing_shape_rejected() {
        assert!(matches!(
            Matrix::zeros(usize::MAX, 2),
            Err(MatError::Overflow { .. })
        ));
    }

    #[test]
    fn from_buffer_copies_row_major() {
        let m = Matrix::from_buffer(2, 2, Some(&[1.0, 2.0, 3.0, 4.0, 99.0])).unwrap();
        assert_eq!(m[(0, 1)], 2.0);
        assert_eq!(m[(1, 0)], 3.0);
        assert_eq!(m.to_vec(), vec![1.0, 2.0, 3.0, 4.0]);

        let empty = Matrix::from_buffer(2, 2, None).unwrap();
        assert_eq!(empty.to_vec(), vec![0.0; 4]);

        assert_eq!(
            Matrix::from_buffer(2, 2, Some(&[1.0])),
            Err(MatError::BufferTooShort { need: 4, got: 1 })
        );
    }

    #[test]
    fn strided_layout_skips_padding() {
        let mut m = Matrix::with_stride(2, 2, 4).unwrap();
        m[(1, 1)] = 7.0;
        assert_eq!(m.as_slice().len(), 8);
        assert_eq!(m.as_slice()[5], 7.0);
        assert_eq!(m.to_vec(), vec![0.0, 0.0, 0.0, 7.0]);
        assert!(Matrix::with_stride(2, 3, 2).is_err());
    }

    #[test]
    fn equality_ignores_padding() {
        let mut padded = Matrix::with_stride(1, 2, 3).unwrap();
        padded.as_mut_slice()[2] = 42.0;
        assert_eq!(padded, Matrix::zeros(1, 2).unwrap());
    }

    #[test]
    fn identity_has_unit_diagonal() {
        let id = Matrix::identity(3).unwrap();
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(id[(i, j)], if i == j { 1.0 } else { 0.0 });
            }
        }
    }

    #[test]
    fn get_is_bounds_checked() {
        let m = Matrix::identity(2).unwrap();
        assert_eq!(m.get(1, 1), Some(1.0));
        assert_eq!(m.get(2, 0), None);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn index_out_of_range_panics() {
        let m = Matrix::zeros(2, 2).unwrap();
        let _ = m[(0, 2)];
    }

    #[test]
    fn faer_round_trip_preserves_values() {
        let m = Matrix::from_rows(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]).unwrap();
        let f = m.to_faer();
        assert_eq!(f[(1, 2)], 6.0);
        assert_eq!(Matrix::from_faer(&f).unwrap(), m);
    }

    #[test]
    fn faer_matrix_reports_shape() {
        let f = Mat::<f32>::zeros(4, 2);
        assert_eq!(MatShape::shape(&f), (4, 2));
        assert_eq!(Matrix::from_faer(&f).unwrap().shape(), (4, 2));
    }

    #[test]
    fn from_rows_rejects_ragged_input() {
        assert!(Matrix::from_rows(&[&[1.0, 2.0], &[3.0]]).is_err());
    }
}
