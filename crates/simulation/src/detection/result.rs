//! Detection output and the EPR record derived from it.

use serde::Serialize;

use super::emissions::{co2_grams, is_recyclable};
use crate::catalog::{BrandEntry, GenericEntry, MaterialType, ShapeType, WasteGroup};
use crate::config::BRAND_CONFIDENCE_GATE;
use crate::localization::LocalizedText;

/// Outcome of one simulated scan.
///
/// Values are never mutated in place; user corrections return a new value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetectionResult {
    pub name: LocalizedText,
    /// Only set when the brand may be shown as fact.
    pub brand: Option<&'static str>,
    pub material: MaterialType,
    pub shape: ShapeType,
    pub group: WasteGroup,
    /// Percent.
    pub confidence: f64,
    pub tip: LocalizedText,
    pub is_known_brand: bool,
    /// Candidate brand that failed the confidence gate. Never authoritative.
    pub low_confidence_brand: Option<&'static str>,
}

impl DetectionResult {
    pub(crate) fn accepted_brand(entry: &BrandEntry, shape: ShapeType, confidence: f64) -> Self {
        Self {
            name: entry.name,
            brand: Some(entry.brand),
            material: entry.material,
            shape,
            group: entry.group,
            confidence,
            tip: entry.tip,
            is_known_brand: true,
            low_confidence_brand: None,
        }
    }

    /// Brand guess below the gate: keep the brand's material, take everything
    /// else from the generic fallback, and surface the brand as a suggestion.
    pub(crate) fn suppressed_brand(
        entry: &BrandEntry,
        fallback: &GenericEntry,
        shape: ShapeType,
        confidence: f64,
    ) -> Self {
        Self {
            name: fallback.name,
            brand: None,
            material: entry.material,
            shape,
            group: fallback.group,
            confidence,
            tip: fallback.tip,
            is_known_brand: false,
            low_confidence_brand: Some(entry.brand),
        }
    }

    pub(crate) fn generic(item: &GenericEntry, shape: ShapeType, confidence: f64) -> Self {
        Self {
            name: item.name,
            brand: None,
            material: item.material,
            shape,
            group: item.group,
            confidence,
            tip: item.tip,
            is_known_brand: false,
            low_confidence_brand: None,
        }
    }

    pub fn passes_gate(&self) -> bool {
        self.confidence >= BRAND_CONFIDENCE_GATE
    }

    /// User told us the material. Nothing else changes.
    pub fn with_material(&self, material: MaterialType) -> Self {
        Self {
            material,
            ..self.clone()
        }
    }

    /// User confirmed the suggested brand. Returns `None` without a suggestion.
    pub fn with_confirmed_brand(&self) -> Option<Self> {
        let suggested = self.low_confidence_brand?;
        Some(Self {
            brand: Some(suggested),
            is_known_brand: true,
            ..self.clone()
        })
    }

    /// User picked a different catalog brand; its display name comes along.
    pub fn with_alternative_brand(&self, entry: &BrandEntry) -> Self {
        Self {
            brand: Some(entry.brand),
            is_known_brand: true,
            name: entry.name,
            ..self.clone()
        }
    }
}

/// Telemetry record appended to the session EPR log for every detection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EprLogEntry {
    pub brand: Option<&'static str>,
    /// Material category.
    pub category: MaterialType,
    pub shape: ShapeType,
    pub group: WasteGroup,
    pub recyclable: bool,
    pub estimated_co2_g: u32,
    /// Unix milliseconds.
    pub timestamp: u64,
}

impl EprLogEntry {
    pub fn from_result(result: &DetectionResult, timestamp: u64) -> Self {
        Self {
            brand: result.brand,
            category: result.material,
            shape: result.shape,
            group: result.group,
            recyclable: is_recyclable(result.group),
            estimated_co2_g: co2_grams(result.material),
            timestamp,
        }
    }
}
