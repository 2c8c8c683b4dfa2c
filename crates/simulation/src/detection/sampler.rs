//! Weighted shape sampling.

use crate::catalog::ShapeType;
use crate::sim_rng::RandomSource;

/// Categorical distribution over observed shapes. Sums to 1.0.
pub const SHAPE_WEIGHTS: [(ShapeType, f64); 7] = [
    (ShapeType::Bottle, 0.22),
    (ShapeType::Can, 0.13),
    (ShapeType::Box, 0.22),
    (ShapeType::Pouch, 0.16),
    (ShapeType::Cup, 0.10),
    (ShapeType::Bag, 0.10),
    (ShapeType::Other, 0.07),
];

/// Pick a shape by subtracting cumulative weights from one draw in `[0, 1)`.
///
/// If rounding leaves the draw positive after the last weight, the result is
/// [`ShapeType::Other`].
pub fn sample_shape_with(weights: &[(ShapeType, f64)], draw: f64) -> ShapeType {
    let mut remaining = draw;
    for (shape, weight) in weights {
        remaining -= weight;
        if remaining <= 0.0 {
            return *shape;
        }
    }
    ShapeType::Other
}

pub fn sample_shape<R: RandomSource + ?Sized>(rng: &mut R) -> ShapeType {
    sample_shape_with(&SHAPE_WEIGHTS, rng.next_unit())
}
