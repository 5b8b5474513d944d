// Pointwise transforms supplied by the caller

use crate::activation::Activation;
use crate::core::traits::Pointwise;
use crate::matrix::Matrix;

/// Replace every element `x` of `mat` with `f(x)`.
pub fn apply_pointwise<F: Pointwise + ?Sized>(mat: &mut Matrix, f: &F) {
    mat.for_each_mut(|v| *v = f.apply(*v));
}

/// Apply one of the built-in activations in place.
pub fn apply_activation(mat: &mut Matrix, act: Activation) {
    apply_pointwise(mat, &act);
}
