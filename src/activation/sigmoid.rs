// Logistic sigmoid

use num_traits::Float;

/// `1 / (1 + e^-x)`, kept strictly inside `(0, 1)` for every finite `x`.
///
/// Uses the branch that never exponentiates a large positive number, then
/// saturates at `[min_positive, 1 - epsilon]` where rounding would otherwise
/// land on 0 or 1. NaN propagates.
///
/// The function is not strictly monotone in the saturated tails: every input
/// whose true value falls below `min_positive` (about `x < -87.3` for `f32`)
/// returns exactly `min_positive`, and every input whose true value rounds
/// above `1 - epsilon` returns exactly `1 - epsilon`.
pub fn sigmoid<T: Float>(x: T) -> T {
    if x.is_nan() {
        return x;
    }
    let s = if x >= T::zero() {
        T::one() / (T::one() + (-x).exp())
    } else {
        let e = x.exp();
        e / (T::one() + e)
    };
    s.max(T::min_positive_value()).min(T::one() - T::epsilon())
}
