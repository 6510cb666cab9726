//! Re-imports for convenience
#[doc(no_inline)]
pub use crate::config::SimulationConfig;
#[doc(no_inline)]
pub use crate::convergence::{ConvergencePoint, ConvergenceReport};
#[doc(no_inline)]
pub use crate::dist::*;
#[doc(no_inline)]
pub use crate::estimate::Estimate;
#[doc(no_inline)]
pub use crate::result::EstimatorError;
#[doc(no_inline)]
pub use crate::sample_set::SampleSet;
#[doc(no_inline)]
pub use crate::simulation::{
    analyze_convergence, run_simulation, Run, Simulation,
};
#[doc(no_inline)]
pub use crate::traits::*;
