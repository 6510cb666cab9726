//! Monte Carlo estimation of π.
//!
//! Points are scattered uniformly over the square `[-r, r] × [-r, r]` and
//! the fraction landing inside the inscribed circle estimates `π/4`.
//!
//! # Example
//!
//! ```
//! use mcpi::prelude::*;
//!
//! let mut sim = Simulation::seeded(42);
//! let run = sim.run(100_000).unwrap();
//!
//! assert!((run.estimate().pi_estimate() - std::f64::consts::PI).abs() < 0.03);
//! ```
#![warn(
    clippy::all,
    clippy::imprecise_flops,
    clippy::unseparated_literal_suffix,
    clippy::unreadable_literal,
    clippy::option_option,
    clippy::implicit_clone
)]
#[cfg(feature = "serde1")]
extern crate serde;

pub mod config;
pub mod consts;
pub mod convergence;
pub mod dist;
pub mod estimate;
pub mod misc;
pub mod prelude;
#[cfg(feature = "render")]
pub mod render;
pub mod result;
pub mod sample_set;
pub mod simulation;
pub mod traits;

#[macro_export]
macro_rules! impl_display {
    ($kind: ty) => {
        impl ::std::fmt::Display for $kind {
            fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                write!(f, "{}", String::from(self))
            }
        }
    };
}
