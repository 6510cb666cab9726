//! Theoretical confidence intervals across a sweep of sample sizes
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use itertools::multiunzip;

use crate::consts::PI_BERNOULLI_VARIANCE;

/// Standard error of the estimator at `n` samples, evaluated at the true
/// value of π: `sqrt(π (4 − π) / n)`.
///
/// This characterizes the estimator rather than any one run, which is what
/// [`Estimate::std_error`](crate::estimate::Estimate::std_error) does.
///
/// # Example
///
/// ```
/// use mcpi::convergence::theoretical_std_error;
///
/// // se shrinks as 1/sqrt(n)
/// let ratio = theoretical_std_error(100) / theoretical_std_error(10_000);
/// assert::close(ratio, 10.0, 1E-12);
/// ```
pub fn theoretical_std_error(n: usize) -> f64 {
    (PI_BERNOULLI_VARIANCE / n as f64).sqrt()
}

/// One row of a [`ConvergenceReport`]
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct ConvergencePoint {
    n_samples: usize,
    estimate: f64,
    ci_width: f64,
    lower_bound: f64,
    upper_bound: f64,
}

impl ConvergencePoint {
    /// Center an interval of half-width `z·se(n)` on `estimate`
    pub fn new(n_samples: usize, estimate: f64, z_score: f64) -> Self {
        let margin = z_score * theoretical_std_error(n_samples);
        ConvergencePoint {
            n_samples,
            estimate,
            ci_width: 2.0 * margin,
            lower_bound: estimate - margin,
            upper_bound: estimate + margin,
        }
    }

    #[inline]
    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    /// π̂ from the run at this sample size
    #[inline]
    pub fn estimate(&self) -> f64 {
        self.estimate
    }

    /// `2·z·se(n)`
    #[inline]
    pub fn ci_width(&self) -> f64 {
        self.ci_width
    }

    #[inline]
    pub fn lower_bound(&self) -> f64 {
        self.lower_bound
    }

    #[inline]
    pub fn upper_bound(&self) -> f64 {
        self.upper_bound
    }

    /// Whether `value` falls inside this interval
    pub fn covers(&self, value: f64) -> bool {
        self.lower_bound <= value && value <= self.upper_bound
    }
}

/// Estimates and theoretical intervals for a batch of sample sizes.
///
/// All sequences are parallel to `sample_sizes` and keep its order,
/// duplicates included.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct ConvergenceReport {
    sample_sizes: Vec<usize>,
    estimates: Vec<f64>,
    ci_widths: Vec<f64>,
    lower_bounds: Vec<f64>,
    upper_bounds: Vec<f64>,
    z_score: f64,
    confidence_level: f64,
}

impl ConvergenceReport {
    pub(crate) fn from_points<I>(
        points: I,
        z_score: f64,
        confidence_level: f64,
    ) -> Self
    where
        I: IntoIterator<Item = ConvergencePoint>,
    {
        let rows = points.into_iter().map(|pt| {
            (
                pt.n_samples,
                pt.estimate,
                pt.ci_width,
                pt.lower_bound,
                pt.upper_bound,
            )
        });
        let (sample_sizes, estimates, ci_widths, lower_bounds, upper_bounds): (
            Vec<usize>,
            Vec<f64>,
            Vec<f64>,
            Vec<f64>,
            Vec<f64>,
        ) = multiunzip(rows);

        ConvergenceReport {
            sample_sizes,
            estimates,
            ci_widths,
            lower_bounds,
            upper_bounds,
            z_score,
            confidence_level,
        }
    }

    #[inline]
    pub fn sample_sizes(&self) -> &[usize] {
        &self.sample_sizes
    }

    #[inline]
    pub fn estimates(&self) -> &[f64] {
        &self.estimates
    }

    #[inline]
    pub fn ci_widths(&self) -> &[f64] {
        &self.ci_widths
    }

    #[inline]
    pub fn lower_bounds(&self) -> &[f64] {
        &self.lower_bounds
    }

    #[inline]
    pub fn upper_bounds(&self) -> &[f64] {
        &self.upper_bounds
    }

    /// Two-sided normal quantile for the confidence level
    #[inline]
    pub fn z_score(&self) -> f64 {
        self.z_score
    }

    #[inline]
    pub fn confidence_level(&self) -> f64 {
        self.confidence_level
    }

    /// Number of sample sizes in the sweep
    #[inline]
    pub fn len(&self) -> usize {
        self.sample_sizes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sample_sizes.is_empty()
    }

    /// Iterate over the rows of the report
    pub fn iter(&self) -> impl Iterator<Item = ConvergencePoint> + '_ {
        itertools::izip!(
            &self.sample_sizes,
            &self.estimates,
            &self.ci_widths,
            &self.lower_bounds,
            &self.upper_bounds
        )
        .map(|(&n_samples, &estimate, &ci_width, &lower, &upper)| {
            ConvergencePoint {
                n_samples,
                estimate,
                ci_width,
                lower_bound: lower,
                upper_bound: upper,
            }
        })
    }
}
