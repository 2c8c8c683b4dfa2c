//! Brand resolution and the confidence gate.
//!
//! Draw order for one detection, each a single [`RandomSource::next_unit`]:
//!
//! 1. shape
//! 2. brand-attempt roll, only when the shape has eligible brands
//! 3. brand index
//! 4. confidence noise
//! 5. fallback index, only when the gate fails and the shape has generics
//!
//! The generic path instead draws the generic index and then its confidence.

use super::geometry::is_forbidden;
use super::result::{DetectionResult, EprLogEntry};
use super::sampler::sample_shape;
use crate::catalog::{
    brands_with_shape, generic_for_material, generics_with_shape, BrandEntry, GenericEntry,
    ShapeType, GENERIC_ITEMS,
};
use crate::config::{
    BRAND_ATTEMPT_PROBABILITY, BRAND_CONFIDENCE_GATE, BRAND_CONFIDENCE_MAX, BRAND_CONFIDENCE_MIN,
    BRAND_CONFIDENCE_NOISE, GENERIC_CONFIDENCE_MIN, GENERIC_CONFIDENCE_SPAN,
};
use crate::sim_rng::RandomSource;

/// A detection and its EPR projection, produced together.
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    pub result: DetectionResult,
    pub epr: EprLogEntry,
}

/// Brands matching `shape` whose category the shape's geometry allows.
pub fn eligible_brands(shape: ShapeType) -> Vec<&'static BrandEntry> {
    brands_with_shape(shape)
        .filter(|b| !is_forbidden(shape, b.category))
        .collect()
}

/// Stored confidence plus symmetric noise, clamped to the brand range.
pub fn perturb_confidence(base: f64, draw: f64) -> f64 {
    let noise = -BRAND_CONFIDENCE_NOISE + draw * (2.0 * BRAND_CONFIDENCE_NOISE);
    (base + noise).clamp(BRAND_CONFIDENCE_MIN, BRAND_CONFIDENCE_MAX)
}

/// Run the full pipeline: sample a shape, then resolve it.
pub fn detect<R: RandomSource + ?Sized>(rng: &mut R, now_ms: u64) -> Detection {
    let shape = sample_shape(rng);
    detect_shape(shape, rng, now_ms)
}

/// Resolve an already-sampled shape.
pub fn detect_shape<R: RandomSource + ?Sized>(
    shape: ShapeType,
    rng: &mut R,
    now_ms: u64,
) -> Detection {
    let eligible = eligible_brands(shape);
    let attempt_brand = !eligible.is_empty() && rng.next_unit() < BRAND_ATTEMPT_PROBABILITY;

    let result = if attempt_brand {
        let entry = eligible[rng.pick_index(eligible.len())];
        let confidence = perturb_confidence(entry.confidence, rng.next_unit());
        if confidence < BRAND_CONFIDENCE_GATE {
            let fallback = low_confidence_fallback(entry, shape, rng);
            DetectionResult::suppressed_brand(entry, fallback, shape, confidence)
        } else {
            DetectionResult::accepted_brand(entry, shape, confidence)
        }
    } else {
        let item = generic_pick(shape, rng);
        let confidence = rng.uniform(
            GENERIC_CONFIDENCE_MIN,
            GENERIC_CONFIDENCE_MIN + GENERIC_CONFIDENCE_SPAN,
        );
        DetectionResult::generic(item, shape, confidence)
    };

    let epr = EprLogEntry::from_result(&result, now_ms);
    Detection { result, epr }
}

/// Same-shape generic if one exists, else the first generic of the brand's
/// material, else the first generic overall.
fn low_confidence_fallback<R: RandomSource + ?Sized>(
    entry: &BrandEntry,
    shape: ShapeType,
    rng: &mut R,
) -> &'static GenericEntry {
    let matching: Vec<&'static GenericEntry> = generics_with_shape(shape).collect();
    if !matching.is_empty() {
        return matching[rng.pick_index(matching.len())];
    }
    generic_for_material(entry.material).unwrap_or(&GENERIC_ITEMS[0])
}

/// Uniform pick among same-shape generics, or among "other" generics.
fn generic_pick<R: RandomSource + ?Sized>(shape: ShapeType, rng: &mut R) -> &'static GenericEntry {
    let mut pool: Vec<&'static GenericEntry> = generics_with_shape(shape).collect();
    if pool.is_empty() {
        pool = generics_with_shape(ShapeType::Other).collect();
    }
    if pool.is_empty() {
        return &GENERIC_ITEMS[0];
    }
    pool[rng.pick_index(pool.len())]
}
