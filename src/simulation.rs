//! The estimator: draws points, classifies them, and summarizes
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use tracing::{debug, trace};

use crate::config::SimulationConfig;
use crate::consts::DEFAULT_RADIUS;
use crate::convergence::{ConvergencePoint, ConvergenceReport};
use crate::dist::Uniform;
use crate::estimate::Estimate;
use crate::misc::z_score;
use crate::result::{EstimatorError, Result};
use crate::sample_set::SampleSet;
use crate::traits::Sampleable;

/// The points of one run together with their summary.
///
/// Deserializing reads only the samples and recomputes the estimate.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde1",
    serde(rename_all = "snake_case", from = "RawRun")
)]
pub struct Run {
    samples: SampleSet,
    estimate: Estimate,
}

#[cfg(feature = "serde1")]
#[derive(Deserialize)]
struct RawRun {
    samples: SampleSet,
}

#[cfg(feature = "serde1")]
impl From<RawRun> for Run {
    fn from(raw: RawRun) -> Self {
        Run::from_samples(raw.samples)
    }
}

impl Run {
    fn from_samples(samples: SampleSet) -> Self {
        let estimate = Estimate::from_samples(&samples);
        Run { samples, estimate }
    }

    #[inline]
    pub fn samples(&self) -> &SampleSet {
        &self.samples
    }

    #[inline]
    pub fn estimate(&self) -> &Estimate {
        &self.estimate
    }

    pub fn into_parts(self) -> (SampleSet, Estimate) {
        (self.samples, self.estimate)
    }
}

/// Monte Carlo estimator of π.
///
/// Each `Simulation` owns its random number generator, so two simulations
/// never disturb each other's streams and a seeded simulation reproduces
/// the same points on every run of the program.
///
/// # Example
///
/// Seeded simulations are reproducible
///
/// ```
/// use mcpi::simulation::Simulation;
///
/// let run_a = Simulation::seeded(1337).run(1_000).unwrap();
/// let run_b = Simulation::seeded(1337).run(1_000).unwrap();
///
/// assert_eq!(run_a, run_b);
/// ```
///
/// Any generator can be used
///
/// ```
/// use mcpi::simulation::Simulation;
/// use rand::rngs::SmallRng;
/// use rand::SeedableRng;
///
/// let rng = SmallRng::seed_from_u64(7);
/// let mut sim = Simulation::with_rng(rng).with_radius(2.0).unwrap();
///
/// let run = sim.run(500).unwrap();
/// assert_eq!(run.samples().radius(), 2.0);
/// assert!(run.samples().xs().iter().all(|x| x.abs() <= 2.0));
/// ```
#[derive(Debug, Clone)]
pub struct Simulation<R: Rng = Xoshiro256PlusPlus> {
    square: Uniform,
    rng: R,
}

impl Simulation<Xoshiro256PlusPlus> {
    /// A unit-radius simulation whose generator is seeded with `seed`
    pub fn seeded(seed: u64) -> Self {
        trace!(seed, "seeding generator");
        Simulation::with_rng(Xoshiro256PlusPlus::seed_from_u64(seed))
    }

    /// A unit-radius simulation seeded from OS entropy. Results are not
    /// reproducible.
    pub fn from_entropy() -> Self {
        trace!("seeding generator from entropy");
        Simulation::with_rng(Xoshiro256PlusPlus::from_entropy())
    }

    /// Build from a [`SimulationConfig`]. The confidence level is checked
    /// here but only used by [`Simulation::analyze_convergence`].
    pub fn from_config(config: &SimulationConfig) -> Result<Self> {
        config.validate()?;
        let sim = match config.seed {
            Some(seed) => Simulation::seeded(seed),
            None => Simulation::from_entropy(),
        };
        sim.with_radius(config.radius)
    }
}

impl<R: Rng> Simulation<R> {
    /// A unit-radius simulation drawing from `rng`
    pub fn with_rng(rng: R) -> Self {
        Simulation {
            square: Uniform::new_unchecked(-DEFAULT_RADIUS, DEFAULT_RADIUS),
            rng,
        }
    }

    /// Change the radius of the circle
    pub fn with_radius(mut self, radius: f64) -> Result<Self> {
        EstimatorError::check_radius(radius)?;
        self.square = Uniform::symmetric(radius)?;
        Ok(self)
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.square.b()
    }

    /// Draw `n` points uniformly over the square and classify them.
    ///
    /// All `n` x coordinates are drawn before any y coordinate.
    pub fn sample(&mut self, n: usize) -> Result<SampleSet> {
        EstimatorError::check_sample_count(n)?;
        let xs = self.square.sample(n, &mut self.rng);
        let ys = self.square.sample(n, &mut self.rng);
        Ok(SampleSet::new_unchecked(xs, ys, self.radius()))
    }

    /// Run one simulation of `n` points.
    ///
    /// # Example
    ///
    /// ```
    /// use mcpi::simulation::Simulation;
    ///
    /// let mut sim = Simulation::seeded(0);
    ///
    /// let run = sim.run(1).unwrap();
    /// let pi_est = run.estimate().pi_estimate();
    /// assert!(pi_est == 0.0 || pi_est == 4.0);
    ///
    /// assert!(sim.run(0).is_err());
    /// ```
    pub fn run(&mut self, n: usize) -> Result<Run> {
        let run = Run::from_samples(self.sample(n)?);
        debug!(
            n,
            n_inside = run.estimate.n_inside(),
            pi_estimate = run.estimate.pi_estimate(),
            std_error = run.estimate.std_error(),
            "simulation run"
        );
        Ok(run)
    }

    /// Run one independent simulation per entry of `sample_sizes`, in order,
    /// and put a theoretical confidence interval around each estimate.
    ///
    /// Draws continue from the generator's current state; repeated sizes get
    /// fresh draws.
    ///
    /// # Example
    ///
    /// ```
    /// use mcpi::simulation::Simulation;
    ///
    /// let mut sim = Simulation::seeded(42);
    /// let report = sim
    ///     .analyze_convergence(&[100, 1_000, 10_000], 0.95)
    ///     .unwrap();
    ///
    /// assert_eq!(report.len(), 3);
    /// assert::close(report.z_score(), 1.959_964, 1E-6);
    ///
    /// // Wider samples, narrower intervals
    /// let ws = report.ci_widths();
    /// assert!(ws[0] > ws[1] && ws[1] > ws[2]);
    /// ```
    pub fn analyze_convergence(
        &mut self,
        sample_sizes: &[usize],
        confidence_level: f64,
    ) -> Result<ConvergenceReport> {
        let z = z_score(confidence_level)?;
        if sample_sizes.is_empty() {
            return Err(EstimatorError::NoSampleSizes);
        }
        for &n in sample_sizes {
            EstimatorError::check_sample_count(n)?;
        }

        let mut points = Vec::with_capacity(sample_sizes.len());
        for &n in sample_sizes {
            let run = self.run(n)?;
            let point =
                ConvergencePoint::new(n, run.estimate().pi_estimate(), z);
            debug!(
                n,
                estimate = point.estimate(),
                ci_width = point.ci_width(),
                "convergence point"
            );
            points.push(point);
        }

        Ok(ConvergenceReport::from_points(points, z, confidence_level))
    }
}

/// Run a single simulation.
///
/// `seed` of `None` seeds from OS entropy.
///
/// # Example
///
/// ```
/// use mcpi::simulation::run_simulation;
///
/// let run = run_simulation(100_000, 1.0, Some(42)).unwrap();
/// assert!((run.estimate().pi_estimate() - 3.14159).abs() < 0.03);
/// ```
pub fn run_simulation(
    n: usize,
    radius: f64,
    seed: Option<u64>,
) -> Result<Run> {
    let config = SimulationConfig {
        seed,
        radius,
        ..SimulationConfig::default()
    };
    Simulation::from_config(&config)?.run(n)
}

/// Sweep a unit-radius simulation across `sample_sizes`.
///
/// The seed, when given, resets the generator once before the first size;
/// later sizes continue the same stream.
pub fn analyze_convergence(
    sample_sizes: &[usize],
    confidence_level: f64,
    seed: Option<u64>,
) -> Result<ConvergenceReport> {
    let config = SimulationConfig {
        seed,
        confidence_level,
        ..SimulationConfig::default()
    };
    Simulation::from_config(&config)?
        .analyze_convergence(sample_sizes, config.confidence_level)
}
