//! Shape to geometry classification and per-geometry category exclusions.

use crate::catalog::{GeometryClass, ProductCategory, ShapeType};

pub fn geometry_for(shape: ShapeType) -> GeometryClass {
    match shape {
        ShapeType::Bottle | ShapeType::Can => GeometryClass::Cylindrical,
        ShapeType::Cup => GeometryClass::Conical,
        ShapeType::Box => GeometryClass::Rectangular,
        ShapeType::Pouch | ShapeType::Bag => GeometryClass::PouchPillow,
        ShapeType::Other => GeometryClass::Irregular,
    }
}

/// Product categories a geometry rules out.
///
/// Every set is currently empty, so brand filtering excludes nothing. Keep
/// them empty until the category rules are confirmed.
pub fn forbidden_categories(geometry: GeometryClass) -> &'static [ProductCategory] {
    match geometry {
        GeometryClass::Rectangular => &[],
        GeometryClass::PouchPillow => &[],
        GeometryClass::Cylindrical => &[],
        GeometryClass::Conical => &[],
        GeometryClass::Irregular => &[],
    }
}

pub fn is_forbidden(shape: ShapeType, category: ProductCategory) -> bool {
    forbidden_categories(geometry_for(shape)).contains(&category)
}
