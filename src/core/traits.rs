//! Core traits for densemat.

/// Shape queries shared by every matrix-like value.
pub trait MatShape {
    /// Number of logical rows.
    fn nrows(&self) -> usize;
    /// Number of logical columns.
    fn ncols(&self) -> usize;
    /// `(rows, cols)`.
    fn shape(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }
}

/// A pure scalar transform applied element by element.
///
/// Implementations must be deterministic and free of side effects. Any
/// `Fn(f32) -> f32` closure or function item qualifies.
pub trait Pointwise {
    /// Compute `f(x)`.
    fn apply(&self, x: f32) -> f32;
}

impl<F: Fn(f32) -> f32> Pointwise for F {
    fn apply(&self, x: f32) -> f32 {
        self(x)
    }
}
