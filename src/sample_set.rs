//! Points drawn in one simulation run and their classification
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use crate::result::{EstimatorError, Result};

/// Points scattered over the square `[-r, r] × [-r, r]`, each flagged by
/// whether it fell inside the inscribed circle of radius `r`.
///
/// The three sequences always have the same length, and `inside[i]` is
/// `true` iff `x[i]² + y[i]² <= r²`. Deserializing reads `xs`, `ys` and
/// `radius` through [`SampleSet::new`] and classifies the points again.
///
/// # Example
///
/// ```
/// use mcpi::sample_set::SampleSet;
///
/// let samples = SampleSet::new(
///     vec![0.0, 0.9, -0.5],
///     vec![0.0, 0.9, 0.5],
///     1.0,
/// ).unwrap();
///
/// assert_eq!(samples.inside(), &[true, false, true]);
/// assert_eq!(samples.n_inside(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde1",
    serde(rename_all = "snake_case", try_from = "RawSampleSet")
)]
pub struct SampleSet {
    xs: Vec<f64>,
    ys: Vec<f64>,
    inside: Vec<bool>,
    radius: f64,
}

#[cfg(feature = "serde1")]
#[derive(Deserialize)]
#[serde(rename_all = "snake_case")]
struct RawSampleSet {
    xs: Vec<f64>,
    ys: Vec<f64>,
    radius: f64,
}

#[cfg(feature = "serde1")]
impl TryFrom<RawSampleSet> for SampleSet {
    type Error = EstimatorError;

    fn try_from(raw: RawSampleSet) -> Result<Self> {
        SampleSet::new(raw.xs, raw.ys, raw.radius)
    }
}

/// Whether `(x, y)` lies in the closed disc of radius `r` centred at the
/// origin.
///
/// Compares squared distances in units of `r`, so no square root is taken
/// and neither `r²` nor the squared coordinates overflow or underflow for
/// extreme radii.
#[inline]
pub fn in_circle(x: f64, y: f64, r: f64) -> bool {
    let (u, v) = (x / r, y / r);
    u * u + v * v <= 1.0
}

impl SampleSet {
    /// Classify a set of points against the circle of radius `radius`
    pub fn new(xs: Vec<f64>, ys: Vec<f64>, radius: f64) -> Result<Self> {
        if xs.len() != ys.len() {
            return Err(EstimatorError::LengthMismatch {
                xs: xs.len(),
                ys: ys.len(),
            });
        }
        EstimatorError::check_sample_count(xs.len())?;
        EstimatorError::check_radius(radius)?;
        Ok(Self::new_unchecked(xs, ys, radius))
    }

    /// Classify without validating lengths or radius
    pub(crate) fn new_unchecked(
        xs: Vec<f64>,
        ys: Vec<f64>,
        radius: f64,
    ) -> Self {
        debug_assert_eq!(xs.len(), ys.len());
        let inside = xs
            .iter()
            .zip(ys.iter())
            .map(|(&x, &y)| in_circle(x, y, radius))
            .collect();

        SampleSet {
            xs,
            ys,
            inside,
            radius,
        }
    }

    /// The x coordinates, in the order they were drawn
    #[inline]
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    /// The y coordinates, in the order they were drawn
    #[inline]
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// `inside()[i]` is `true` if point `i` is in the circle
    #[inline]
    pub fn inside(&self) -> &[bool] {
        &self.inside
    }

    /// Number of points
    #[inline]
    pub fn n(&self) -> usize {
        self.inside.len()
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Number of points inside the circle
    pub fn n_inside(&self) -> usize {
        self.inside.iter().filter(|&&inside| inside).count()
    }

    /// Iterate over `(x, y, inside)` triples
    pub fn points(&self) -> impl Iterator<Item = (f64, f64, bool)> + '_ {
        itertools::izip!(&self.xs, &self.ys, &self.inside)
            .map(|(&x, &y, &inside)| (x, y, inside))
    }
}
