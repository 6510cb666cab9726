use crate::dist::Gaussian;
use crate::result::{EstimatorError, Result};
use crate::traits::InverseCdf;

/// Two-sided critical value of the standard normal for a confidence level,
/// `Φ⁻¹(1 − (1 − c) / 2)`.
///
/// Levels so close to 1 that the tail probability rounds away have no
/// finite critical value and are rejected along with those outside (0, 1).
///
/// # Example
///
/// ```
/// use mcpi::misc::z_score;
///
/// let z = z_score(0.95).unwrap();
/// assert::close(z, 1.959_964, 1E-6);
///
/// assert!(z_score(1.0).is_err());
/// ```
pub fn z_score(confidence_level: f64) -> Result<f64> {
    let level = EstimatorError::check_confidence_level(confidence_level)?;
    let p = 1.0 - (1.0 - level) / 2.0;
    let z = Gaussian::standard().invcdf(p);
    if z.is_finite() {
        Ok(z)
    } else {
        Err(EstimatorError::InvalidConfidenceLevel { level })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1E-9;

    #[test]
    fn common_levels() {
        assert::close(z_score(0.90).unwrap(), 1.644_853_626_951_471_5, TOL);
        assert::close(z_score(0.95).unwrap(), 1.959_963_984_540_053_6, TOL);
        assert::close(z_score(0.99).unwrap(), 2.575_829_303_548_9, TOL);
    }

    #[test]
    fn increases_with_confidence() {
        let zs: Vec<f64> = [0.1, 0.5, 0.8, 0.95, 0.999]
            .iter()
            .map(|&c| z_score(c).unwrap())
            .collect();
        assert!(zs.windows(2).all(|w| w[0] < w[1]));
        assert!(zs[0] > 0.0);
    }

    #[test]
    fn rejects_levels_outside_open_unit_interval() {
        for level in [0.0, 1.0, -0.5, 1.5, f64::NAN] {
            assert!(
                matches!(
                    z_score(level),
                    Err(EstimatorError::InvalidConfidenceLevel { .. })
                ),
                "level {} should be rejected",
                level
            );
        }
    }

    #[test]
    fn rejects_levels_whose_tail_rounds_to_zero() {
        let level = 1.0 - f64::EPSILON / 2.0;
        assert!(level < 1.0);
        assert_eq!(
            z_score(level),
            Err(EstimatorError::InvalidConfidenceLevel { level })
        );
    }

    #[test]
    fn accepts_levels_near_one_with_a_finite_tail() {
        let z = z_score(1.0 - 1E-12).unwrap();
        assert!(z.is_finite());
        assert!(z > z_score(0.999_999).unwrap());
    }
}
