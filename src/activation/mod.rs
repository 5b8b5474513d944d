//! Activation functions applied elementwise by the network layers.
//!
//! The matrix operations never call these directly; they are handed to
//! [`apply_pointwise`](crate::ops::apply_pointwise) as a [`Pointwise`] capability.
//! `Activation` selects one of the built-in transforms by name, which is how
//! [`MatOptions`](crate::config::options::MatOptions) refers to them.

use crate::core::traits::Pointwise;
use crate::error::MatError;
use std::fmt;
use std::str::FromStr;

pub mod relu;
pub mod sigmoid;
pub use relu::relu;
pub use sigmoid::sigmoid;

/// Built-in activation kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// Logistic sigmoid, `1 / (1 + e^-x)`.
    Sigmoid,
    /// Rectified linear unit, `max(0, x)`.
    Relu,
}

impl Pointwise for Activation {
    fn apply(&self, x: f32) -> f32 {
        match self {
            Activation::Sigmoid => sigmoid(x),
            Activation::Relu => relu(x),
        }
    }
}

impl FromStr for Activation {
    type Err = MatError;

    fn from_str(s: &str) -> Result<Self, MatError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sigmoid" => Ok(Activation::Sigmoid),
            "relu" => Ok(Activation::Relu),
            _ => Err(MatError::UnknownActivation(s.to_string())),
        }
    }
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Activation::Sigmoid => write!(f, "sigmoid"),
            Activation::Relu => write!(f, "relu"),
        }
    }
}
