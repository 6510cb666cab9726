//! Errors returned by the estimator
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use std::fmt;

use crate::dist::UniformError;

pub type Result<T> = std::result::Result<T, EstimatorError>;

/// Invalid input to one of the estimator's public operations.
///
/// Every operation validates its arguments before drawing any points, so an
/// error never comes with a partial result.
///
/// An estimate of exactly 4 (every point inside) gives a standard error of
/// zero. That is well defined and is not reported as an error.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub enum EstimatorError {
    /// The number of samples was zero
    InvalidSampleCount { n: usize },
    /// The radius was not a finite positive number
    InvalidRadius { radius: f64 },
    /// The confidence level was not in the open interval (0, 1)
    InvalidConfidenceLevel { level: f64 },
    /// A convergence analysis was requested with no sample sizes
    NoSampleSizes,
    /// Coordinate sequences of different lengths
    LengthMismatch { xs: usize, ys: usize },
}

impl EstimatorError {
    pub(crate) fn check_sample_count(n: usize) -> Result<usize> {
        if n == 0 {
            Err(Self::InvalidSampleCount { n })
        } else {
            Ok(n)
        }
    }

    pub(crate) fn check_radius(radius: f64) -> Result<f64> {
        if radius.is_finite() && radius > 0.0 {
            Ok(radius)
        } else {
            Err(Self::InvalidRadius { radius })
        }
    }

    pub(crate) fn check_confidence_level(level: f64) -> Result<f64> {
        // NaN fails both comparisons
        if level > 0.0 && level < 1.0 {
            Ok(level)
        } else {
            Err(Self::InvalidConfidenceLevel { level })
        }
    }
}

impl From<UniformError> for EstimatorError {
    fn from(err: UniformError) -> Self {
        // The square is always built as [-r, r]
        match err {
            UniformError::InvalidInterval { b, .. } => {
                Self::InvalidRadius { radius: b }
            }
            UniformError::ANotFinite { a } => {
                Self::InvalidRadius { radius: -a }
            }
            UniformError::BNotFinite { b } => Self::InvalidRadius { radius: b },
        }
    }
}

impl std::error::Error for EstimatorError {}

impl fmt::Display for EstimatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSampleCount { n } => {
                write!(f, "sample count ({}) must be greater than zero", n)
            }
            Self::InvalidRadius { radius } => write!(
                f,
                "radius ({}) must be finite and greater than zero",
                radius
            ),
            Self::InvalidConfidenceLevel { level } => write!(
                f,
                "confidence level ({}) must be in the open interval (0, 1)",
                level
            ),
            Self::NoSampleSizes => {
                write!(f, "at least one sample size is required")
            }
            Self::LengthMismatch { xs, ys } => write!(
                f,
                "coordinate lengths differ: {} x values, {} y values",
                xs, ys
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_count_zero_is_invalid() {
        assert_eq!(
            EstimatorError::check_sample_count(0),
            Err(EstimatorError::InvalidSampleCount { n: 0 })
        );
        assert_eq!(EstimatorError::check_sample_count(1), Ok(1));
    }

    #[test]
    fn radius_must_be_finite_and_positive() {
        assert!(EstimatorError::check_radius(0.5).is_ok());
        assert!(EstimatorError::check_radius(0.0).is_err());
        assert!(EstimatorError::check_radius(-1.0).is_err());
        assert!(EstimatorError::check_radius(f64::INFINITY).is_err());
        assert!(EstimatorError::check_radius(f64::NAN).is_err());
    }

    #[test]
    fn confidence_level_bounds_are_exclusive() {
        assert!(EstimatorError::check_confidence_level(0.95).is_ok());
        assert!(EstimatorError::check_confidence_level(0.0).is_err());
        assert!(EstimatorError::check_confidence_level(1.0).is_err());
        assert!(EstimatorError::check_confidence_level(-0.2).is_err());
        assert!(EstimatorError::check_confidence_level(f64::NAN).is_err());
    }

    #[test]
    fn uniform_error_maps_to_invalid_radius() {
        let err: EstimatorError =
            UniformError::InvalidInterval { a: 0.0, b: 0.0 }.into();
        assert_eq!(err, EstimatorError::InvalidRadius { radius: 0.0 });
    }

    #[test]
    fn display_names_the_offending_value() {
        let msg = EstimatorError::InvalidConfidenceLevel { level: 1.0 }
            .to_string();
        assert!(msg.contains("(1)"));
    }
}
