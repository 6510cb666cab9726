//! Point estimate of π and its error statistics
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use crate::consts::{PI, SQUARE_TO_CIRCLE};
use crate::misc::z_score;
use crate::result::Result;
use crate::sample_set::SampleSet;

/// Summary of one [`SampleSet`].
///
/// The fraction of points inside the circle is a Bernoulli proportion `p`
/// with `π ≈ 4p`, so the standard error is the binomial one scaled by 4,
/// `sqrt(π̂ (4 − π̂) / n)`, evaluated at the estimate. It is zero when the
/// estimate is exactly 0 or 4; callers must not assume it is positive.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct Estimate {
    pi_estimate: f64,
    n_inside: usize,
    abs_error: f64,
    std_error: f64,
    n_samples: usize,
    radius: f64,
}

impl Estimate {
    /// Summarize a set of classified points
    ///
    /// # Example
    ///
    /// ```
    /// use mcpi::estimate::Estimate;
    /// use mcpi::sample_set::SampleSet;
    ///
    /// let samples = SampleSet::new(
    ///     vec![0.0, 0.1, 0.9, -0.2],
    ///     vec![0.0, 0.3, 0.9, 0.1],
    ///     1.0,
    /// ).unwrap();
    ///
    /// let est = Estimate::from_samples(&samples);
    /// assert_eq!(est.n_inside(), 3);
    /// assert::close(est.pi_estimate(), 3.0, 1E-12);
    /// assert::close(est.std_error(), (3.0_f64 / 4.0).sqrt(), 1E-12);
    /// ```
    pub fn from_samples(samples: &SampleSet) -> Self {
        Self::from_counts(samples.n_inside(), samples.n(), samples.radius())
    }

    pub(crate) fn from_counts(
        n_inside: usize,
        n_samples: usize,
        radius: f64,
    ) -> Self {
        debug_assert!(n_samples > 0 && n_inside <= n_samples);
        let n = n_samples as f64;
        let pi_estimate = SQUARE_TO_CIRCLE * n_inside as f64 / n;
        let std_error =
            (pi_estimate * (SQUARE_TO_CIRCLE - pi_estimate) / n).sqrt();

        Estimate {
            pi_estimate,
            n_inside,
            abs_error: (pi_estimate - PI).abs(),
            std_error,
            n_samples,
            radius,
        }
    }

    /// `4 × n_inside / n`, in [0, 4]
    #[inline]
    pub fn pi_estimate(&self) -> f64 {
        self.pi_estimate
    }

    #[inline]
    pub fn n_inside(&self) -> usize {
        self.n_inside
    }

    /// `|π̂ − π|`
    #[inline]
    pub fn abs_error(&self) -> f64 {
        self.abs_error
    }

    #[inline]
    pub fn std_error(&self) -> f64 {
        self.std_error
    }

    #[inline]
    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Empirical interval `π̂ ± z·se` at the given confidence level, using
    /// this run's standard error.
    ///
    /// Collapses to a point when the standard error is zero.
    pub fn confidence_interval(
        &self,
        confidence_level: f64,
    ) -> Result<(f64, f64)> {
        let margin = z_score(confidence_level)? * self.std_error;
        Ok((self.pi_estimate - margin, self.pi_estimate + margin))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::EstimatorError;

    const TOL: f64 = 1E-12;

    #[test]
    fn all_inside_estimates_four_with_zero_std_error() {
        let est = Estimate::from_counts(10, 10, 1.0);
        assert::close(est.pi_estimate(), 4.0, TOL);
        assert_eq!(est.std_error(), 0.0);
        assert::close(est.abs_error(), 4.0 - PI, TOL);
    }

    #[test]
    fn none_inside_estimates_zero() {
        let est = Estimate::from_counts(0, 7, 1.0);
        assert_eq!(est.pi_estimate(), 0.0);
        assert_eq!(est.std_error(), 0.0);
        assert::close(est.abs_error(), PI, TOL);
    }

    #[test]
    fn std_error_uses_the_estimate() {
        let est = Estimate::from_counts(785, 1000, 2.0);
        assert::close(est.pi_estimate(), 3.14, TOL);
        let se = (3.14 * 0.86 / 1000.0_f64).sqrt();
        assert::close(est.std_error(), se, TOL);
        assert_eq!(est.n_samples(), 1000);
        assert_eq!(est.radius(), 2.0);
    }

    #[test]
    fn confidence_interval_is_symmetric_about_estimate() {
        let est = Estimate::from_counts(785, 1000, 1.0);
        let (lower, upper) = est.confidence_interval(0.95).unwrap();
        assert::close(
            est.pi_estimate() - lower,
            upper - est.pi_estimate(),
            TOL,
        );
        let width = 2.0 * 1.959_963_984_540_054 * est.std_error();
        assert::close(upper - lower, width, 1E-9);
    }

    #[test]
    fn degenerate_confidence_interval_is_a_point() {
        let est = Estimate::from_counts(1, 1, 1.0);
        let (lower, upper) = est.confidence_interval(0.99).unwrap();
        assert_eq!(lower, 4.0);
        assert_eq!(upper, 4.0);
    }

    #[test]
    fn confidence_interval_rejects_bad_level() {
        let est = Estimate::from_counts(3, 4, 1.0);
        assert_eq!(
            est.confidence_interval(1.0),
            Err(EstimatorError::InvalidConfidenceLevel { level: 1.0 })
        );
    }
}
