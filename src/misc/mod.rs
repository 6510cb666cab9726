//! Statistical helpers
mod normal;

pub use normal::*;
