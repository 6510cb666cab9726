//! Continuous uniform distribution, U(a, b) on the closed interval x in [a, b]
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use crate::impl_display;
use crate::traits::*;
use rand::Rng;
use std::fmt;

/// [Continuous uniform distribution](https://en.wikipedia.org/wiki/Uniform_distribution_(continuous)),
/// U(a, b) on the closed interval x in [a, b]
///
/// Draws are taken as `mid + half·u` with `u` uniform on [-1, 1], so any
/// pair of finite bounds can be sampled even when `b - a` overflows.
///
/// # Example
///
/// ```
/// use mcpi::prelude::*;
///
/// let mut rng = rand::thread_rng();
/// let u = Uniform::new(2.0, 4.0).unwrap();
///
/// let xs: Vec<f64> = u.sample(100, &mut rng);
/// assert!(xs.iter().all(|x| (2.0..=4.0).contains(x)));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct Uniform {
    a: f64,
    b: f64,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub enum UniformError {
    /// A >= B
    InvalidInterval { a: f64, b: f64 },
    /// A was infinite or NaN
    ANotFinite { a: f64 },
    /// B was infinite or NaN
    BNotFinite { b: f64 },
}

impl Uniform {
    /// Create a new uniform distribution on [a, b]
    #[inline]
    pub fn new(a: f64, b: f64) -> Result<Self, UniformError> {
        if !a.is_finite() {
            Err(UniformError::ANotFinite { a })
        } else if !b.is_finite() {
            Err(UniformError::BNotFinite { b })
        } else if a >= b {
            Err(UniformError::InvalidInterval { a, b })
        } else {
            Ok(Uniform::new_unchecked(a, b))
        }
    }

    /// Creates a new Uniform without checking whether the parameters are
    /// valid.
    #[inline]
    pub fn new_unchecked(a: f64, b: f64) -> Self {
        Uniform { a, b }
    }

    /// Uniform on [-r, r], one side of the square bounding a circle of
    /// radius `r`
    ///
    /// # Example
    ///
    /// ```
    /// # use mcpi::dist::Uniform;
    /// let u = Uniform::symmetric(1.5).unwrap();
    /// assert_eq!(u.b(), 1.5);
    ///
    /// assert!(Uniform::symmetric(0.0).is_err());
    /// ```
    #[inline]
    pub fn symmetric(r: f64) -> Result<Self, UniformError> {
        Uniform::new(-r, r)
    }

    /// Get the upper bound, b
    #[inline]
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Midpoint and half-width, each computed without forming `b - a`
    #[inline]
    fn center_and_half_width(&self) -> (f64, f64) {
        (self.a / 2.0 + self.b / 2.0, self.b / 2.0 - self.a / 2.0)
    }

    #[inline]
    fn unit_sampler() -> rand_distr::Uniform<f64> {
        rand_distr::Uniform::new_inclusive(-1.0, 1.0)
    }
}

impl From<&Uniform> for String {
    fn from(u: &Uniform) -> String {
        format!("U({}, {})", u.a, u.b)
    }
}

impl_display!(Uniform);

impl Sampleable<f64> for Uniform {
    fn draw<R: Rng>(&self, rng: &mut R) -> f64 {
        let (mid, half) = self.center_and_half_width();
        half.mul_add(rng.sample(Uniform::unit_sampler()), mid)
    }

    fn sample<R: Rng>(&self, n: usize, rng: &mut R) -> Vec<f64> {
        let (mid, half) = self.center_and_half_width();
        let u = Uniform::unit_sampler();
        (0..n).map(|_| half.mul_add(rng.sample(u), mid)).collect()
    }
}

impl std::error::Error for UniformError {}

impl fmt::Display for UniformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInterval { a, b } => {
                write!(f, "invalid interval: (a, b) = ({}, {})", a, b)
            }
            Self::ANotFinite { a } => write!(f, "non-finite a: {}", a),
            Self::BNotFinite { b } => write!(f, "non-finite b: {}", b),
        }
    }
}
