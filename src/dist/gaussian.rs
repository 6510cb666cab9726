//! Gaussian/Normal distribution over x in (-∞, ∞)
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use special::Error as _;
use std::f64::consts::SQRT_2;

use crate::impl_display;
use crate::traits::InverseCdf;

/// Gaussian / [Normal distribution](https://en.wikipedia.org/wiki/Normal_distribution),
/// N(μ, σ) over real values.
///
/// Only the inverse CDF is provided; it turns confidence levels into
/// interval widths.
///
/// # Example
///
/// ```
/// use mcpi::prelude::*;
///
/// let gauss = Gaussian::standard();
///
/// // Two-sided 95% critical value
/// let z: f64 = gauss.invcdf(0.975);
/// assert::close(z, 1.959_963_984_540_054, 1E-9);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct Gaussian {
    /// Mean
    mu: f64,
    /// Standard deviation
    sigma: f64,
}

impl Gaussian {
    /// Standard normal
    ///
    /// # Example
    ///
    /// ```rust
    /// # use mcpi::dist::Gaussian;
    /// let gauss = Gaussian::standard();
    ///
    /// assert_eq!(gauss.to_string(), "N(μ: 0, σ: 1)");
    /// ```
    #[inline]
    #[must_use]
    pub fn standard() -> Self {
        Gaussian {
            mu: 0.0,
            sigma: 1.0,
        }
    }
}

impl From<&Gaussian> for String {
    fn from(gauss: &Gaussian) -> String {
        format!("N(μ: {}, σ: {})", gauss.mu, gauss.sigma)
    }
}

impl_display!(Gaussian);

impl InverseCdf<f64> for Gaussian {
    /// # Panics
    ///
    /// If `p` is outside [0, 1]
    fn invcdf(&self, p: f64) -> f64 {
        assert!((0.0..=1.0).contains(&p), "P out of range");

        (self.sigma * SQRT_2)
            .mul_add(2.0_f64.mul_add(p, -1.0).inv_error(), self.mu)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1E-12;

    #[test]
    fn invcdf_at_one_half_should_be_mu() {
        let mu = 1.2315;
        let gauss = Gaussian { mu, sigma: 1.0 };
        let x: f64 = gauss.invcdf(0.5);
        assert::close(x, mu, TOL);
    }

    #[test]
    fn invcdf_scales_with_sigma() {
        let gauss = Gaussian {
            mu: -0.4,
            sigma: 2.5,
        };
        let z = Gaussian::standard().invcdf(0.9);
        assert::close(gauss.invcdf(0.9), 2.5_f64.mul_add(z, -0.4), 1E-9);
    }

    #[test]
    fn standard_quantiles() {
        let gauss = Gaussian::standard();
        assert::close(gauss.invcdf(0.95), 1.644_853_626_951_471_5, 1E-9);
        assert::close(gauss.invcdf(0.975), 1.959_963_984_540_053_6, 1E-9);
        assert::close(gauss.invcdf(0.995), 2.575_829_303_548_9, 1E-9);
    }

    #[test]
    fn invcdf_is_antisymmetric() {
        let gauss = Gaussian::standard();
        for p in [0.6, 0.75, 0.9, 0.99] {
            assert::close(gauss.invcdf(p), -gauss.invcdf(1.0 - p), 1E-9);
        }
    }

    #[test]
    #[should_panic]
    fn invcdf_out_of_range_panics() {
        let _x: f64 = Gaussian::standard().invcdf(1.5);
    }
}
