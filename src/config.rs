//! Run configuration
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_CONFIDENCE_LEVEL, DEFAULT_RADIUS};
use crate::result::{EstimatorError, Result};

/// Everything a caller can tune about a simulation.
///
/// # Example
///
/// ```
/// use mcpi::config::SimulationConfig;
///
/// let config = SimulationConfig::default()
///     .with_seed(42)
///     .with_confidence_level(0.99);
///
/// assert_eq!(config.seed, Some(42));
/// assert_eq!(config.radius, 1.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct SimulationConfig {
    /// Seed for the generator. `None` seeds from OS entropy, so results
    /// are not reproducible.
    #[cfg_attr(feature = "serde1", serde(default))]
    pub seed: Option<u64>,
    /// Radius of the inscribed circle
    #[cfg_attr(feature = "serde1", serde(default = "default_radius"))]
    pub radius: f64,
    /// Two-sided confidence level for intervals, in (0, 1)
    #[cfg_attr(
        feature = "serde1",
        serde(default = "default_confidence_level")
    )]
    pub confidence_level: f64,
}

#[cfg(feature = "serde1")]
fn default_radius() -> f64 {
    DEFAULT_RADIUS
}

#[cfg(feature = "serde1")]
fn default_confidence_level() -> f64 {
    DEFAULT_CONFIDENCE_LEVEL
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            seed: None,
            radius: DEFAULT_RADIUS,
            confidence_level: DEFAULT_CONFIDENCE_LEVEL,
        }
    }
}

impl SimulationConfig {
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    #[must_use]
    pub fn with_confidence_level(mut self, confidence_level: f64) -> Self {
        self.confidence_level = confidence_level;
        self
    }

    /// Check the radius and the confidence level
    pub fn validate(&self) -> Result<()> {
        EstimatorError::check_radius(self.radius)?;
        EstimatorError::check_confidence_level(self.confidence_level)?;
        Ok(())
    }
}
