//! Known branded products.

use super::types::{BrandEntry, MaterialType, ProductCategory, ShapeType, WasteGroup};
use crate::localization::LocalizedText;

pub static KNOWN_BRANDS: &[BrandEntry] = &[
    BrandEntry {
        brand: "Lavie",
        material: MaterialType::Plastic,
        shape: ShapeType::Bottle,
        group: WasteGroup::Recyclable,
        category: ProductCategory::Beverage,
        name: LocalizedText::new("Chai nước Lavie", "Lavie Water Bottle"),
        confidence: 96.2,
        tip: LocalizedText::new(
            "Rửa sạch và bỏ vào thùng nhựa tái chế",
            "Rinse and place in plastic recycling bin",
        ),
    },
    BrandEntry {
        brand: "Aquafina",
        material: MaterialType::Plastic,
        shape: ShapeType::Bottle,
        group: WasteGroup::Recyclable,
        category: ProductCategory::Beverage,
        name: LocalizedText::new("Chai nước Aquafina", "Aquafina Water Bottle"),
        confidence: 95.4,
        tip: LocalizedText::new(
            "Rửa sạch và bỏ vào thùng nhựa tái chế",
            "Rinse and place in plastic recycling bin",
        ),
    },
    BrandEntry {
        brand: "Sting (PepsiCo)",
        material: MaterialType::Plastic,
        shape: ShapeType::Bottle,
        group: WasteGroup::Recyclable,
        category: ProductCategory::Beverage,
        name: LocalizedText::new("Chai PET Sting Energy", "Sting Energy PET Bottle"),
        confidence: 95.8,
        tip: LocalizedText::new(
            "Tháo nhãn, rửa sạch và tái chế",
            "Remove label, rinse, and recycle",
        ),
    },
    BrandEntry {
        brand: "C2 (URC)",
        material: MaterialType::Plastic,
        shape: ShapeType::Bottle,
        group: WasteGroup::Recyclable,
        category: ProductCategory::Beverage,
        name: LocalizedText::new("Chai trà C2", "C2 Tea Bottle"),
        confidence: 94.9,
        tip: LocalizedText::new(
            "Tháo nhãn, rửa sạch và tái chế",
            "Remove label, rinse, and recycle",
        ),
    },
    BrandEntry {
        brand: "Trung Nguyên",
        material: MaterialType::Plastic,
        shape: ShapeType::Bottle,
        group: WasteGroup::Recyclable,
        category: ProductCategory::Beverage,
        name: LocalizedText::new("Chai cà phê Trung Nguyên", "Trung Nguyen Coffee Bottle"),
        confidence: 92.3,
        tip: LocalizedText::new(
            "Rửa sạch và tái chế",
            "Rinse and recycle",
        ),
    },
    BrandEntry {
        brand: "Coca-Cola",
        material: MaterialType::Metal,
        shape: ShapeType::Can,
        group: WasteGroup::Recyclable,
        category: ProductCategory::Beverage,
        name: LocalizedText::new("Lon nhôm Coca-Cola", "Coca-Cola Aluminum Can"),
        confidence: 98.7,
        tip: LocalizedText::new(
            "Ép dẹp và bỏ vào thùng kim loại tái chế",
            "Crush and place in metal recycling bin",
        ),
    },
    BrandEntry {
        brand: "Pepsi",
        material: MaterialType::Metal,
        shape: ShapeType::Can,
        group: WasteGroup::Recyclable,
        category: ProductCategory::Beverage,
        name: LocalizedText::new("Lon Pepsi", "Pepsi Can"),
        confidence: 97.3,
        tip: LocalizedText::new(
            "Ép dẹp và bỏ vào thùng kim loại tái chế",
            "Crush and place in metal recycling bin",
        ),
    },
    BrandEntry {
        brand: "Red Bull",
        material: MaterialType::Metal,
        shape: ShapeType::Can,
        group: WasteGroup::Recyclable,
        category: ProductCategory::Beverage,
        name: LocalizedText::new("Lon Red Bull", "Red Bull Can"),
        confidence: 96.5,
        tip: LocalizedText::new(
            "Ép dẹp và bỏ vào thùng kim loại tái chế",
            "Crush and place in metal recycling bin",
        ),
    },
    BrandEntry {
        brand: "Vinamilk",
        material: MaterialType::Paper,
        shape: ShapeType::Box,
        group: WasteGroup::Recyclable,
        category: ProductCategory::Dairy,
        name: LocalizedText::new("Hộp sữa Vinamilk", "Vinamilk Carton"),
        confidence: 94.1,
        tip: LocalizedText::new(
            "Làm phẳng và bỏ vào thùng giấy tái chế",
            "Flatten and place in paper recycling bin",
        ),
    },
    BrandEntry {
        brand: "TH True Milk",
        material: MaterialType::Paper,
        shape: ShapeType::Box,
        group: WasteGroup::Recyclable,
        category: ProductCategory::Dairy,
        name: LocalizedText::new("Hộp sữa TH True Milk", "TH True Milk Carton"),
        confidence: 93.5,
        tip: LocalizedText::new(
            "Làm phẳng và bỏ vào thùng giấy tái chế",
            "Flatten and place in paper recycling bin",
        ),
    },
    BrandEntry {
        brand: "Orion (Custas)",
        material: MaterialType::Paper,
        shape: ShapeType::Box,
        group: WasteGroup::Recyclable,
        category: ProductCategory::FoodSnack,
        name: LocalizedText::new("Hộp bánh Custas Orion", "Orion Custas Box"),
        confidence: 91.8,
        tip: LocalizedText::new(
            "Làm phẳng hộp giấy và tái chế. Bao bì bên trong bỏ riêng.",
            "Flatten cardboard and recycle. Separate inner plastic packaging.",
        ),
    },
    BrandEntry {
        brand: "Oishi",
        material: MaterialType::Paper,
        shape: ShapeType::Box,
        group: WasteGroup::Recyclable,
        category: ProductCategory::FoodSnack,
        name: LocalizedText::new("Hộp bánh Oishi", "Oishi Snack Box"),
        confidence: 90.2,
        tip: LocalizedText::new(
            "Làm phẳng hộp giấy và tái chế",
            "Flatten cardboard and recycle",
        ),
    },
    BrandEntry {
        brand: "Acecook",
        material: MaterialType::Paper,
        shape: ShapeType::Box,
        group: WasteGroup::Recyclable,
        category: ProductCategory::FoodSnack,
        name: LocalizedText::new("Hộp mì Acecook", "Acecook Noodle Box"),
        confidence: 90.5,
        tip: LocalizedText::new(
            "Làm phẳng và tái chế hộp giấy",
            "Flatten and recycle cardboard",
        ),
    },
    BrandEntry {
        brand: "Masan",
        material: MaterialType::Paper,
        shape: ShapeType::Box,
        group: WasteGroup::Recyclable,
        category: ProductCategory::FoodSnack,
        name: LocalizedText::new("Hộp sản phẩm Masan", "Masan Product Box"),
        confidence: 90.0,
        tip: LocalizedText::new(
            "Làm phẳng và tái chế",
            "Flatten and recycle",
        ),
    },
    BrandEntry {
        brand: "Oishi",
        material: MaterialType::Plastic,
        shape: ShapeType::Pouch,
        group: WasteGroup::Residual,
        category: ProductCategory::FoodSnack,
        name: LocalizedText::new("Túi snack Oishi", "Oishi Snack Pouch"),
        confidence: 91.0,
        tip: LocalizedText::new(
            "Bao bì nhiều lớp, khó tái chế. Bỏ vào thùng rác còn lại.",
            "Multi-layer packaging, hard to recycle. Place in residual bin.",
        ),
    },
    BrandEntry {
        brand: "Lay's (PepsiCo)",
        material: MaterialType::Plastic,
        shape: ShapeType::Pouch,
        group: WasteGroup::Residual,
        category: ProductCategory::FoodSnack,
        name: LocalizedText::new("Túi snack Lay's", "Lay's Snack Pouch"),
        confidence: 92.4,
        tip: LocalizedText::new(
            "Bao bì nhiều lớp, khó tái chế. Bỏ vào thùng rác còn lại.",
            "Multi-layer packaging, hard to recycle. Place in residual bin.",
        ),
    },
    BrandEntry {
        brand: "Acecook",
        material: MaterialType::Plastic,
        shape: ShapeType::Pouch,
        group: WasteGroup::Residual,
        category: ProductCategory::FoodSnack,
        name: LocalizedText::new("Gói mì Acecook", "Acecook Noodle Pack"),
        confidence: 90.8,
        tip: LocalizedText::new(
            "Bao bì nhiều lớp. Bỏ vào thùng rác còn lại.",
            "Multi-layer packaging. Place in residual bin.",
        ),
    },
    BrandEntry {
        brand: "Heineken",
        material: MaterialType::Glass,
        shape: ShapeType::Bottle,
        group: WasteGroup::Recyclable,
        category: ProductCategory::Beverage,
        name: LocalizedText::new("Chai thủy tinh Heineken", "Heineken Glass Bottle"),
        confidence: 99.1,
        tip: LocalizedText::new(
            "Bỏ nguyên vẹn vào thùng thủy tinh",
            "Place intact in glass recycling bin",
        ),
    },
    BrandEntry {
        brand: "Saigon Beer",
        material: MaterialType::Glass,
        shape: ShapeType::Bottle,
        group: WasteGroup::Recyclable,
        category: ProductCategory::Beverage,
        name: LocalizedText::new("Chai bia Sài Gòn", "Saigon Beer Bottle"),
        confidence: 98.2,
        tip: LocalizedText::new(
            "Bỏ nguyên vẹn vào thùng thủy tinh",
            "Place intact in glass recycling bin",
        ),
    },
    BrandEntry {
        brand: "Tiger Beer",
        material: MaterialType::Glass,
        shape: ShapeType::Bottle,
        group: WasteGroup::Recyclable,
        category: ProductCategory::Beverage,
        name: LocalizedText::new("Chai bia Tiger", "Tiger Beer Bottle"),
        confidence: 97.6,
        tip: LocalizedText::new(
            "Bỏ nguyên vẹn vào thùng thủy tinh",
            "Place intact in glass recycling bin",
        ),
    },
    BrandEntry {
        brand: "Highlands Coffee",
        material: MaterialType::Plastic,
        shape: ShapeType::Cup,
        group: WasteGroup::Recyclable,
        category: ProductCategory::CoffeeShop,
        name: LocalizedText::new("Ly Highlands Coffee", "Highlands Coffee Cup"),
        confidence: 90.5,
        tip: LocalizedText::new(
            "Rửa sạch và bỏ vào thùng nhựa tái chế",
            "Rinse and place in plastic recycling bin",
        ),
    },
    BrandEntry {
        brand: "Phuc Long",
        material: MaterialType::Plastic,
        shape: ShapeType::Cup,
        group: WasteGroup::Recyclable,
        category: ProductCategory::CoffeeShop,
        name: LocalizedText::new("Ly Phúc Long", "Phuc Long Cup"),
        confidence: 90.1,
        tip: LocalizedText::new(
            "Rửa sạch và bỏ vào thùng nhựa tái chế",
            "Rinse and place in plastic recycling bin",
        ),
    },
];
