//! Closed enumerations shared by the catalog, the classifier and the ledger.

use serde::{Deserialize, Serialize};

use crate::localization::LocalizedText;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialType {
    Plastic,
    Metal,
    Paper,
    Glass,
    Organic,
}

impl MaterialType {
    pub fn all() -> &'static [MaterialType] {
        &[
            MaterialType::Plastic,
            MaterialType::Metal,
            MaterialType::Paper,
            MaterialType::Glass,
            MaterialType::Organic,
        ]
    }

    /// Key into the UI string table.
    pub fn key(self) -> &'static str {
        match self {
            MaterialType::Plastic => "plastic",
            MaterialType::Metal => "metal",
            MaterialType::Paper => "paper",
            MaterialType::Glass => "glass",
            MaterialType::Organic => "organic",
        }
    }

    pub fn label(self) -> LocalizedText {
        match self {
            MaterialType::Plastic => LocalizedText::new("Nhựa", "Plastic"),
            MaterialType::Metal => LocalizedText::new("Kim loại", "Metal"),
            MaterialType::Paper => LocalizedText::new("Giấy", "Paper"),
            MaterialType::Glass => LocalizedText::new("Thủy tinh", "Glass"),
            MaterialType::Organic => LocalizedText::new("Hữu cơ", "Organic"),
        }
    }
}

/// Observed silhouette of the scanned item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeType {
    Bottle,
    Can,
    Box,
    Pouch,
    Cup,
    Bag,
    Other,
}

impl ShapeType {
    pub fn all() -> &'static [ShapeType] {
        &[
            ShapeType::Bottle,
            ShapeType::Can,
            ShapeType::Box,
            ShapeType::Pouch,
            ShapeType::Cup,
            ShapeType::Bag,
            ShapeType::Other,
        ]
    }

    pub fn label(self) -> LocalizedText {
        match self {
            ShapeType::Bottle => LocalizedText::new("Chai", "Bottle"),
            ShapeType::Can => LocalizedText::new("Lon", "Can"),
            ShapeType::Box => LocalizedText::new("Hộp", "Box"),
            ShapeType::Pouch => LocalizedText::new("Túi", "Pouch"),
            ShapeType::Cup => LocalizedText::new("Ly", "Cup"),
            ShapeType::Bag => LocalizedText::new("Túi", "Bag"),
            ShapeType::Other => LocalizedText::new("Khác", "Other"),
        }
    }
}

/// Coarse disposal category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WasteGroup {
    Recyclable,
    Organic,
    Residual,
}

impl WasteGroup {
    pub fn label(self) -> LocalizedText {
        match self {
            WasteGroup::Recyclable => LocalizedText::new("Tái chế được", "Recyclable"),
            WasteGroup::Organic => LocalizedText::new("Hữu cơ", "Organic"),
            WasteGroup::Residual => LocalizedText::new("Rác còn lại", "Residual"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeometryClass {
    Cylindrical,
    Rectangular,
    PouchPillow,
    Conical,
    Irregular,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductCategory {
    Beverage,
    FoodSnack,
    Dairy,
    CoffeeShop,
    General,
}

/// A known branded product archetype.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BrandEntry {
    pub brand: &'static str,
    pub material: MaterialType,
    pub shape: ShapeType,
    pub group: WasteGroup,
    pub category: ProductCategory,
    pub name: LocalizedText,
    /// Stored base confidence in percent, before noise.
    pub confidence: f64,
    pub tip: LocalizedText,
}

/// An unbranded material template used when no brand may be asserted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GenericEntry {
    pub material: MaterialType,
    pub shape: ShapeType,
    pub group: WasteGroup,
    pub name: LocalizedText,
    pub tip: LocalizedText,
}
