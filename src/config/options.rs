//! Runtime options for the matrix layer.
//!
//! `MatOptions` gathers the few knobs the surrounding network code sets once at
//! start-up: which activation to use, an optional seed for the shared random
//! generator, the precision of diagnostic output and the size of the rayon pool.

use crate::activation::Activation;
use crate::error::MatError;
use crate::matrix::random::seed_shared;

/// Matrix-layer options.
#[derive(Debug, Clone)]
pub struct MatOptions {
    /// Activation name (sigmoid, relu)
    pub activation: String,

    /// Seed for the shared generator; `None` keeps entropy seeding
    pub seed: Option<u64>,

    /// Digits after the decimal point in diagnostic output
    pub precision: usize,

    /// Rayon worker count; `None` uses one per logical CPU
    pub threads: Option<usize>,
}

impl Default for MatOptions {
    fn default() -> Self {
        Self {
            activation: "sigmoid".to_string(),
            seed: None,
            precision: 6,
            threads: None,
        }
    }
}

impl MatOptions {
    /// Parse the configured activation name.
    pub fn activation(&self) -> Result<Activation, MatError> {
        self.activation.parse()
    }

    /// Push the seed and thread settings into the process and return the
    /// selected activation. The activation is validated before anything is applied.
    pub fn apply(&self) -> Result<Activation, MatError> {
        let act = self.activation()?;
        if let Some(seed) = self.seed {
            seed_shared(seed);
        }
        #[cfg(feature = "rayon")]
        crate::parallel::configure_threads(self.threads);
        Ok(act)
    }
}
