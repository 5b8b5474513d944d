use num_traits::Float;

/// `max(0, x)`.
pub fn relu<T: Float>(x: T) -> T {
    if x > T::zero() { x } else { T::zero() }
}
