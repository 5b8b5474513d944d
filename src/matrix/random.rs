//! Uniform random fill.
//!
//! `random_uniform` draws from one process-wide generator. Consumption is
//! serialised through a mutex so concurrent callers each see a distinct run of
//! sequential draws. The generator starts from OS entropy; call [`seed_shared`]
//! for reproducible runs. `random_uniform_with` takes a caller-owned generator
//! instead and never touches the shared one.

use crate::error::MatError;
use crate::matrix::Matrix;
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Mutex, OnceLock};

static SHARED_RNG: OnceLock<Mutex<StdRng>> = OnceLock::new();

fn shared() -> &'static Mutex<StdRng> {
    SHARED_RNG.get_or_init(|| Mutex::new(StdRng::from_entropy()))
}

/// Reseed the shared generator.
pub fn seed_shared(seed: u64) {
    debug!("reseeding shared generator with {seed}");
    let mut rng = shared().lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    *rng = StdRng::seed_from_u64(seed);
}

/// `rows x cols` matrix of draws from `[0, 1)` using the shared generator.
pub fn random_uniform(rows: usize, cols: usize) -> Result<Matrix, MatError> {
    let mut rng = shared().lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    random_uniform_with(&mut *rng, rows, cols)
}

/// `rows x cols` matrix of draws from `[0, 1)` using `rng`.
pub fn random_uniform_with<R: Rng + ?Sized>(
    rng: &mut R,
    rows: usize,
    cols: usize,
) -> Result<Matrix, MatError> {
    let mut mat = Matrix::zeros(rows, cols)?;
    mat.for_each_mut(|v| *v = rng.r#gen::<f32>());
    Ok(mat)
}

impl Matrix {
    /// See [`random_uniform`].
    pub fn random_uniform(rows: usize, cols: usize) -> Result<Self, MatError> {
        random_uniform(rows, cols)
    }
}
