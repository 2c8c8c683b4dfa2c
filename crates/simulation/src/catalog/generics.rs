//! Unbranded material templates.
//!
//! The first entry doubles as the last-resort fallback, so it must stay a
//! plain recyclable item.

use super::types::{GenericEntry, MaterialType, ShapeType, WasteGroup};
use crate::localization::LocalizedText;

pub static GENERIC_ITEMS: &[GenericEntry] = &[
    GenericEntry {
        material: MaterialType::Plastic,
        shape: ShapeType::Bottle,
        group: WasteGroup::Recyclable,
        name: LocalizedText::new("Chai nhựa", "Plastic Bottle"),
        tip: LocalizedText::new(
            "Rửa sạch, tháo nắp và bỏ vào thùng nhựa tái chế",
            "Rinse, remove cap, and place in plastic recycling bin",
        ),
    },
    GenericEntry {
        material: MaterialType::Plastic,
        shape: ShapeType::Bag,
        group: WasteGroup::Residual,
        name: LocalizedText::new("Túi ni lông", "Plastic Bag"),
        tip: LocalizedText::new(
            "Gom lại và đem đến điểm thu gom chuyên dụng",
            "Collect and bring to a dedicated collection point",
        ),
    },
    GenericEntry {
        material: MaterialType::Plastic,
        shape: ShapeType::Cup,
        group: WasteGroup::Recyclable,
        name: LocalizedText::new("Ly nhựa", "Plastic Cup"),
        tip: LocalizedText::new(
            "Rửa sạch và bỏ vào thùng nhựa tái chế",
            "Rinse and place in plastic recycling bin",
        ),
    },
    GenericEntry {
        material: MaterialType::Plastic,
        shape: ShapeType::Pouch,
        group: WasteGroup::Residual,
        name: LocalizedText::new("Túi mềm nhựa", "Plastic Pouch"),
        tip: LocalizedText::new(
            "Cắt góc, rửa sạch và bỏ vào thùng tái chế",
            "Cut corner, rinse, and place in recycling bin",
        ),
    },
    GenericEntry {
        material: MaterialType::Metal,
        shape: ShapeType::Can,
        group: WasteGroup::Recyclable,
        name: LocalizedText::new("Lon kim loại", "Metal Can"),
        tip: LocalizedText::new(
            "Ép dẹp và bỏ vào thùng kim loại tái chế",
            "Crush and place in metal recycling bin",
        ),
    },
    GenericEntry {
        material: MaterialType::Metal,
        shape: ShapeType::Other,
        group: WasteGroup::Recyclable,
        name: LocalizedText::new("Mảnh kim loại", "Metal Piece"),
        tip: LocalizedText::new(
            "Bỏ vào thùng kim loại tái chế",
            "Place in metal recycling bin",
        ),
    },
    GenericEntry {
        material: MaterialType::Paper,
        shape: ShapeType::Box,
        group: WasteGroup::Recyclable,
        name: LocalizedText::new("Hộp giấy", "Paper Box"),
        tip: LocalizedText::new(
            "Làm phẳng và bỏ vào thùng giấy tái chế",
            "Flatten and place in paper recycling bin",
        ),
    },
    GenericEntry {
        material: MaterialType::Paper,
        shape: ShapeType::Other,
        group: WasteGroup::Recyclable,
        name: LocalizedText::new("Giấy / Báo", "Paper / Newspaper"),
        tip: LocalizedText::new(
            "Gấp gọn và bỏ vào thùng giấy tái chế",
            "Fold neatly and place in paper recycling bin",
        ),
    },
    GenericEntry {
        material: MaterialType::Glass,
        shape: ShapeType::Bottle,
        group: WasteGroup::Recyclable,
        name: LocalizedText::new("Chai thủy tinh", "Glass Bottle"),
        tip: LocalizedText::new(
            "Bỏ nguyên vẹn vào thùng thủy tinh",
            "Place intact in glass recycling bin",
        ),
    },
    GenericEntry {
        material: MaterialType::Glass,
        shape: ShapeType::Other,
        group: WasteGroup::Recyclable,
        name: LocalizedText::new("Mảnh thủy tinh", "Glass Piece"),
        tip: LocalizedText::new(
            "Bao cẩn thận và bỏ vào thùng thủy tinh",
            "Wrap carefully and place in glass bin",
        ),
    },
    GenericEntry {
        material: MaterialType::Organic,
        shape: ShapeType::Other,
        group: WasteGroup::Organic,
        name: LocalizedText::new("Rác hữu cơ", "Organic Waste"),
        tip: LocalizedText::new(
            "Bỏ vào thùng rác hữu cơ để ủ phân",
            "Place in organic bin for composting",
        ),
    },
];
