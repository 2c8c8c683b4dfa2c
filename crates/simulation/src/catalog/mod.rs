//! Static product catalog: known brands and generic material templates.
//!
//! Both tables are immutable for the lifetime of the process. Lookups return
//! borrowed `'static` rows so results can reference them without cloning.

mod brands;
mod generics;
mod types;


pub use brands::KNOWN_BRANDS;
pub use generics::GENERIC_ITEMS;
pub use types::{
    BrandEntry, GenericEntry, GeometryClass, MaterialType, ProductCategory, ShapeType, WasteGroup,
};

/// How many alternative brands the learn prompt offers.
pub const MAX_ALTERNATIVE_BRANDS: usize = 3;

pub fn brands_with_shape(shape: ShapeType) -> impl Iterator<Item = &'static BrandEntry> {
    KNOWN_BRANDS.iter().filter(move |b| b.shape == shape)
}

pub fn generics_with_shape(shape: ShapeType) -> impl Iterator<Item = &'static GenericEntry> {
    GENERIC_ITEMS.iter().filter(move |g| g.shape == shape)
}

/// First generic template made of `material`, if any.
pub fn generic_for_material(material: MaterialType) -> Option<&'static GenericEntry> {
    GENERIC_ITEMS.iter().find(|g| g.material == material)
}

/// First catalog row carrying this brand name and shape.
pub fn find_brand(brand: &str, shape: ShapeType) -> Option<&'static BrandEntry> {
    brands_with_shape(shape).find(|b| b.brand == brand)
}

/// Up to [`MAX_ALTERNATIVE_BRANDS`] same-shape brands other than `suggested`.
pub fn alternative_brands(shape: ShapeType, suggested: &str) -> Vec<&'static BrandEntry> {
    brands_with_shape(shape)
        .filter(|b| b.brand != suggested)
        .take(MAX_ALTERNATIVE_BRANDS)
        .collect()
}
