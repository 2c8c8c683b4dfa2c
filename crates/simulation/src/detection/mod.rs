//! Simulated waste detection.
//!
//! Pipeline: weighted shape sample, geometry class, category exclusions,
//! brand lookup behind a confidence gate, then the CO2 projection for the
//! EPR log. No inference happens here; every decision is one uniform draw
//! from a [`RandomSource`](crate::sim_rng::RandomSource).

mod emissions;
mod geometry;
mod resolve;
mod result;
mod sampler;

#[cfg(test)]
mod tests;

pub use emissions::{co2_grams, is_recyclable};
pub use geometry::{forbidden_categories, geometry_for, is_forbidden};
pub use resolve::{detect, detect_shape, eligible_brands, perturb_confidence, Detection};
pub use result::{DetectionResult, EprLogEntry};
pub use sampler::{sample_shape, sample_shape_with, SHAPE_WEIGHTS};
