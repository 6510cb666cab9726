//! Mathematical and default constants

/// π, the value every estimate is measured against
pub const PI: f64 = std::f64::consts::PI;
/// Area of the square over the area of the circle, times π: (2r)² / r²
pub const SQUARE_TO_CIRCLE: f64 = 4.0;
/// Default radius of the inscribed circle
pub const DEFAULT_RADIUS: f64 = 1.0;
/// Default two-sided confidence level for intervals
pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 0.95;
/// Variance of a single scaled Bernoulli draw at the true value, π(4 − π)
pub const PI_BERNOULLI_VARIANCE: f64 = 2.696_766_213_269_814_5;
