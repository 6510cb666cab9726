//! Probability distributions used by the estimator
mod gaussian;
mod uniform;

pub use gaussian::Gaussian;
pub use uniform::{Uniform, UniformError};
