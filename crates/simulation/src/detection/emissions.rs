//! Per-material CO2 estimates used for EPR logging.

use crate::catalog::{MaterialType, WasteGroup};

/// Estimated CO2-equivalent grams for one item of the given material.
pub fn co2_grams(material: MaterialType) -> u32 {
    match material {
        MaterialType::Plastic => 82,
        MaterialType::Metal => 170,
        MaterialType::Paper => 17,
        MaterialType::Glass => 86,
        MaterialType::Organic => 5,
    }
}

pub fn is_recyclable(group: WasteGroup) -> bool {
    group == WasteGroup::Recyclable
}
