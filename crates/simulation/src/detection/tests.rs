use super::*;
use crate::catalog::{
    find_brand, GeometryClass, MaterialType, ShapeType, WasteGroup, KNOWN_BRANDS,
};
use crate::sim_rng::{RandomSource, ScriptedRandom, SimRng};

const NOW: u64 = 1_700_000_000_000;

// Draws that land on each shape under SHAPE_WEIGHTS.
const DRAW_BOTTLE: f64 = 0.1;
const DRAW_CAN: f64 = 0.3;
const DRAW_BOX: f64 = 0.5;
const DRAW_POUCH: f64 = 0.6;
const DRAW_BAG: f64 = 0.85;
const DRAW_OTHER: f64 = 0.95;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// -------------------------------------------------------------------------
// Sampler
// -------------------------------------------------------------------------

#[test]
fn test_shape_weights_sum_to_one() {
    let total: f64 = SHAPE_WEIGHTS.iter().map(|(_, w)| w).sum();
    assert!(approx(total, 1.0));
}

#[test]
fn test_sampler_bucket_boundaries() {
    assert_eq!(sample_shape_with(&SHAPE_WEIGHTS, 0.0), ShapeType::Bottle);
    assert_eq!(sample_shape_with(&SHAPE_WEIGHTS, DRAW_BOTTLE), ShapeType::Bottle);
    assert_eq!(sample_shape_with(&SHAPE_WEIGHTS, DRAW_CAN), ShapeType::Can);
    assert_eq!(sample_shape_with(&SHAPE_WEIGHTS, DRAW_BOX), ShapeType::Box);
    assert_eq!(sample_shape_with(&SHAPE_WEIGHTS, DRAW_POUCH), ShapeType::Pouch);
    assert_eq!(sample_shape_with(&SHAPE_WEIGHTS, 0.8), ShapeType::Cup);
    assert_eq!(sample_shape_with(&SHAPE_WEIGHTS, DRAW_BAG), ShapeType::Bag);
    assert_eq!(sample_shape_with(&SHAPE_WEIGHTS, DRAW_OTHER), ShapeType::Other);
}

#[test]
fn test_sampler_falls_back_to_other_when_weights_run_out() {
    let short = [(ShapeType::Bottle, 0.2), (ShapeType::Can, 0.2)];
    assert_eq!(sample_shape_with(&short, 0.9), ShapeType::Other);
    assert_eq!(sample_shape_with(&[], 0.0), ShapeType::Other);
}

#[test]
fn test_sampler_distribution_roughly_matches_weights() {
    let mut rng = SimRng::from_seed_u64(11);
    let n = 20_000;
    let bottles = (0..n)
        .filter(|_| sample_shape(&mut rng) == ShapeType::Bottle)
        .count();
    let share = bottles as f64 / n as f64;
    assert!((share - 0.22).abs() < 0.02, "bottle share {share}");
}

// -------------------------------------------------------------------------
// Geometry
// -------------------------------------------------------------------------

#[test]
fn test_geometry_is_total() {
    for shape in ShapeType::all() {
        let geometry = geometry_for(*shape);
        assert!(forbidden_categories(geometry).is_empty());
    }
    assert_eq!(geometry_for(ShapeType::Can), GeometryClass::Cylindrical);
    assert_eq!(geometry_for(ShapeType::Cup), GeometryClass::Conical);
    assert_eq!(geometry_for(ShapeType::Box), GeometryClass::Rectangular);
    assert_eq!(geometry_for(ShapeType::Bag), GeometryClass::PouchPillow);
    assert_eq!(geometry_for(ShapeType::Other), GeometryClass::Irregular);
}

#[test]
fn test_inert_exclusions_keep_all_same_shape_brands() {
    for shape in ShapeType::all() {
        let all = KNOWN_BRANDS.iter().filter(|b| b.shape == *shape).count();
        assert_eq!(eligible_brands(*shape).len(), all);
    }
}

// -------------------------------------------------------------------------
// Emissions
// -------------------------------------------------------------------------

#[test]
fn test_co2_lookup_is_pure() {
    for material in MaterialType::all() {
        assert_eq!(co2_grams(*material), co2_grams(*material));
    }
    assert_eq!(co2_grams(MaterialType::Metal), 170);
    assert_eq!(co2_grams(MaterialType::Organic), 5);
    assert!(is_recyclable(WasteGroup::Recyclable));
    assert!(!is_recyclable(WasteGroup::Residual));
}

// -------------------------------------------------------------------------
// Scenarios
// -------------------------------------------------------------------------

#[test]
fn test_coca_cola_worst_noise_still_disclosed() {
    // can, attempt, first can brand, noise -3
    let mut rng = ScriptedRandom::new([DRAW_CAN, 0.0, 0.0, 0.0]);
    let detection = detect(&mut rng, NOW);
    let r = &detection.result;

    assert_eq!(r.shape, ShapeType::Can);
    assert_eq!(r.brand, Some("Coca-Cola"));
    assert!(r.is_known_brand);
    assert!(r.low_confidence_brand.is_none());
    assert!(approx(r.confidence, 95.7));
    assert_eq!(detection.epr.brand, Some("Coca-Cola"));
    assert!(detection.epr.recyclable);
    assert_eq!(detection.epr.estimated_co2_g, 170);
    assert_eq!(detection.epr.timestamp, NOW);
}

#[test]
fn test_oishi_pouch_below_gate_is_suppressed() {
    // pouch, attempt, Oishi (first pouch brand), noise -3, first pouch generic
    let mut rng = ScriptedRandom::new([DRAW_POUCH, 0.0, 0.0, 0.0, 0.0]);
    let detection = detect(&mut rng, NOW);
    let r = &detection.result;

    assert!(approx(r.confidence, 88.0));
    assert_eq!(r.brand, None);
    assert!(!r.is_known_brand);
    assert_eq!(r.low_confidence_brand, Some("Oishi"));
    assert_eq!(r.material, MaterialType::Plastic);
    assert_eq!(r.group, WasteGroup::Residual);
    assert_eq!(r.name.en, "Plastic Pouch");
    assert_eq!(detection.epr.brand, None);
    assert_eq!(detection.epr.group, WasteGroup::Residual);
    assert!(!detection.epr.recyclable);
}

#[test]
fn test_suppressed_result_keeps_brand_material() {
    // box, attempt, Masan (last box brand, base 90.0), noise -3 -> 87.0
    let box_brands = eligible_brands(ShapeType::Box);
    let masan_idx = box_brands.iter().position(|b| b.brand == "Masan").unwrap();
    let idx_draw = (masan_idx as f64 + 0.5) / box_brands.len() as f64;
    let mut rng = ScriptedRandom::new([DRAW_BOX, 0.0, idx_draw, 0.0, 0.0]);
    let r = detect(&mut rng, NOW).result;

    assert_eq!(r.low_confidence_brand, Some("Masan"));
    assert_eq!(r.material, MaterialType::Paper);
    assert_eq!(r.name.en, "Paper Box");
}

#[test]
fn test_roll_above_probability_takes_generic_path() {
    // can, roll 0.9 (no attempt), generic index, generic confidence draw
    let mut rng = ScriptedRandom::new([DRAW_CAN, 0.9, 0.0, 0.5]);
    let r = detect(&mut rng, NOW).result;

    assert_eq!(r.brand, None);
    assert!(r.low_confidence_brand.is_none());
    assert_eq!(r.material, MaterialType::Metal);
    assert_eq!(r.name.en, "Metal Can");
    assert!(approx(r.confidence, 82.0));
}

#[test]
fn test_shape_without_brands_skips_roll() {
    // bag has no brands: draws are shape, generic index, generic confidence
    let mut rng = ScriptedRandom::new([DRAW_BAG, 0.0, 0.0]);
    let r = detect(&mut rng, NOW).result;
    assert_eq!(r.shape, ShapeType::Bag);
    assert_eq!(r.name.en, "Plastic Bag");
    assert!(approx(r.confidence, 75.0));
}

#[test]
fn test_other_shape_uses_other_pool() {
    let last = 0.999;
    let mut rng = ScriptedRandom::new([DRAW_OTHER, last, 0.0]);
    let r = detect(&mut rng, NOW).result;
    assert_eq!(r.shape, ShapeType::Other);
    assert_eq!(r.material, MaterialType::Organic);
    assert_eq!(r.group, WasteGroup::Organic);
}

#[test]
fn test_perturb_confidence_clamps() {
    assert_eq!(perturb_confidence(99.5, 0.999_999), 99.9);
    assert_eq!(perturb_confidence(69.0, 0.0), 68.0);
    assert!(approx(perturb_confidence(92.0, 0.5), 92.0));
}

// -------------------------------------------------------------------------
// Properties over seeded runs
// -------------------------------------------------------------------------

#[test]
fn test_gate_invariants_hold_over_many_runs() {
    let mut rng = SimRng::from_seed_u64(2024);
    let mut saw_accepted = false;
    let mut saw_suppressed = false;
    let mut saw_generic = false;

    for _ in 0..5_000 {
        let Detection { result: r, epr } = detect(&mut rng, NOW);
        if r.is_known_brand {
            saw_accepted = true;
            assert!(r.brand.is_some());
            assert!(r.confidence >= 90.0);
        } else if r.low_confidence_brand.is_some() {
            saw_suppressed = true;
            assert!(r.brand.is_none());
            assert!(r.confidence >= 68.0 && r.confidence < 90.0);
        } else {
            saw_generic = true;
            assert!(r.brand.is_none());
            assert!(r.confidence >= 75.0 && r.confidence < 89.0);
        }
        assert_eq!(epr.brand, r.brand);
        assert_eq!(epr.estimated_co2_g, co2_grams(r.material));
        assert_eq!(epr.recyclable, r.group == WasteGroup::Recyclable);
    }

    assert!(saw_accepted && saw_suppressed && saw_generic);
}

// -------------------------------------------------------------------------
// Corrections
// -------------------------------------------------------------------------

fn suppressed_oishi() -> DetectionResult {
    let mut rng = ScriptedRandom::new([DRAW_POUCH, 0.0, 0.0, 0.0, 0.0]);
    detect(&mut rng, NOW).result
}

#[test]
fn test_confirm_suggested_brand_changes_only_brand_fields() {
    let before = suppressed_oishi();
    let after = before.with_confirmed_brand().unwrap();

    assert_eq!(after.brand, Some("Oishi"));
    assert!(after.is_known_brand);
    assert_eq!(after.name, before.name);
    assert_eq!(after.material, before.material);
    assert_eq!(after.group, before.group);
    assert_eq!(after.confidence, before.confidence);
    assert_eq!(after.tip, before.tip);
    assert_eq!(after.low_confidence_brand, before.low_confidence_brand);
}

#[test]
fn test_confirm_without_suggestion_is_none() {
    let mut rng = ScriptedRandom::new([DRAW_BAG, 0.0, 0.0]);
    let generic = detect(&mut rng, NOW).result;
    assert!(generic.with_confirmed_brand().is_none());
}

#[test]
fn test_alternative_brand_takes_its_name() {
    let before = suppressed_oishi();
    let lays = find_brand("Lay's (PepsiCo)", ShapeType::Pouch).unwrap();
    let after = before.with_alternative_brand(lays);
    assert_eq!(after.brand, Some("Lay's (PepsiCo)"));
    assert_eq!(after.name, lays.name);
    assert_eq!(after.group, before.group);
}

#[test]
fn test_material_confirmation_changes_only_material() {
    let before = suppressed_oishi();
    let after = before.with_material(MaterialType::Paper);
    assert_eq!(after.material, MaterialType::Paper);
    assert_eq!(
        DetectionResult {
            material: before.material,
            ..after
        },
        before
    );
}

#[test]
fn test_bottle_scenario_uses_first_bottle_brand() {
    let mut rng = ScriptedRandom::new([DRAW_BOTTLE, 0.0, 0.0, 0.5]);
    let r = detect(&mut rng, NOW).result;
    assert_eq!(r.brand, Some("Lavie"));
    assert!(approx(r.confidence, 96.2));
    // One shape draw plus three brand draws consumed.
    assert_eq!(rng.next_unit(), DRAW_BOTTLE);
}
