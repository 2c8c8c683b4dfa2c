//! Static EPR report data and the aggregates derived from it.

use serde::Serialize;

use super::booking::PickupSchedule;
use crate::catalog::MaterialType;
use crate::epr_log::EprLog;
use crate::localization::LocalizedText;

/// Building-view baseline figures, before any booked pickups.
pub const BASELINE_WASTE_KG: u64 = 1245;
pub const BASELINE_CO2_KG: u64 = 380;
pub const BASELINE_BUILDING_SCANS: u64 = 847;
/// CO₂ reduction credited per kg of booked waste.
pub const CO2_KG_PER_WASTE_KG: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Sector {
    Beverages,
    FoodSnacks,
    Dairy,
    Mixed,
}

impl Sector {
    pub fn label(self) -> LocalizedText {
        match self {
            Sector::Beverages => LocalizedText::new("Đồ uống", "Beverages"),
            Sector::FoodSnacks => LocalizedText::new("Thực phẩm & Bánh kẹo", "Food & Snacks"),
            Sector::Dairy => LocalizedText::new("Sữa", "Dairy"),
            Sector::Mixed => LocalizedText::new("Hỗn hợp", "Mixed"),
        }
    }
}

pub const OTHER_LOCAL_BRAND: &str = "Other/Local";

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EprReportRow {
    pub brand: &'static str,
    pub items: u32,
    /// `None` for mixed-material rows.
    pub category: Option<MaterialType>,
    pub sector: Sector,
    pub co2_g: u32,
}

impl EprReportRow {
    pub fn brand_label(&self) -> LocalizedText {
        if self.brand == OTHER_LOCAL_BRAND {
            LocalizedText::new("Địa phương/Khác", "Other/Local")
        } else {
            LocalizedText::new(self.brand, self.brand)
        }
    }

    pub fn category_label(&self) -> LocalizedText {
        match self.category {
            Some(material) => material.label(),
            None => LocalizedText::new("Hỗn hợp", "Mixed"),
        }
    }
}

const fn row(
    brand: &'static str,
    items: u32,
    category: Option<MaterialType>,
    sector: Sector,
    co2_g: u32,
) -> EprReportRow {
    EprReportRow {
        brand,
        items,
        category,
        sector,
        co2_g,
    }
}

pub static EPR_REPORT: &[EprReportRow] = &[
    row("Lavie", 320, Some(MaterialType::Plastic), Sector::Beverages, 26240),
    row("Coca-Cola", 280, Some(MaterialType::Metal), Sector::Beverages, 47600),
    row("Vinamilk", 195, Some(MaterialType::Paper), Sector::Dairy, 3315),
    row("Pepsi", 160, Some(MaterialType::Metal), Sector::Beverages, 27200),
    row("Heineken", 110, Some(MaterialType::Glass), Sector::Beverages, 9460),
    row("Orion (Custas)", 85, Some(MaterialType::Paper), Sector::FoodSnacks, 1445),
    row("Oishi", 72, Some(MaterialType::Plastic), Sector::FoodSnacks, 5904),
    row("Trung Nguyên", 68, Some(MaterialType::Plastic), Sector::Beverages, 5576),
    row("Acecook", 55, Some(MaterialType::Paper), Sector::FoodSnacks, 935),
    row("Masan", 42, Some(MaterialType::Paper), Sector::FoodSnacks, 714),
    row(OTHER_LOCAL_BRAND, 145, None, Sector::Mixed, 11890),
];

/// Item counts per sector, in order of first appearance in the report.
pub fn sector_totals() -> Vec<(Sector, u32)> {
    let mut totals: Vec<(Sector, u32)> = Vec::new();
    for r in EPR_REPORT {
        match totals.iter_mut().find(|(s, _)| *s == r.sector) {
            Some((_, n)) => *n += r.items,
            None => totals.push((r.sector, r.items)),
        }
    }
    totals
}

pub fn report_total_items() -> u32 {
    EPR_REPORT.iter().map(|r| r.items).sum()
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EsgShare {
    pub label: LocalizedText,
    pub percent: u32,
}

pub static ESG_BREAKDOWN: &[EsgShare] = &[
    EsgShare {
        label: LocalizedText::new("CO₂ giảm", "CO₂ Saved"),
        percent: 45,
    },
    EsgShare {
        label: LocalizedText::new("Nước tiết kiệm", "Water Saved"),
        percent: 25,
    },
    EsgShare {
        label: LocalizedText::new("Năng lượng tiết kiệm", "Energy Saved"),
        percent: 20,
    },
    EsgShare {
        label: LocalizedText::new("Rác chuyển hướng", "Waste Diverted"),
        percent: 10,
    },
];

/// Monthly kg collected per material for one building.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BuildingWaste {
    pub building: &'static str,
    pub plastic: u32,
    pub paper: u32,
    pub metal: u32,
    pub glass: u32,
}

impl BuildingWaste {
    pub fn total(&self) -> u32 {
        self.plastic + self.paper + self.metal + self.glass
    }

    pub fn by_material(&self) -> [(MaterialType, u32); 4] {
        [
            (MaterialType::Plastic, self.plastic),
            (MaterialType::Paper, self.paper),
            (MaterialType::Metal, self.metal),
            (MaterialType::Glass, self.glass),
        ]
    }
}

pub static WASTE_BY_BUILDING: &[BuildingWaste] = &[
    BuildingWaste {
        building: "Keangnam",
        plastic: 120,
        paper: 80,
        metal: 45,
        glass: 30,
    },
    BuildingWaste {
        building: "Royal City",
        plastic: 95,
        paper: 110,
        metal: 35,
        glass: 25,
    },
    BuildingWaste {
        building: "Vinhomes",
        plastic: 150,
        paper: 70,
        metal: 55,
        glass: 40,
    },
    BuildingWaste {
        building: "Times City",
        plastic: 85,
        paper: 90,
        metal: 25,
        glass: 35,
    },
];

/// CO₂ kg credited for a booked waste volume, rounded.
pub fn projected_co2_kg(waste_kg: f64) -> u64 {
    (waste_kg * CO2_KG_PER_WASTE_KG).round().max(0.0) as u64
}

/// Summary cards of the building-manager view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BuildingSummary {
    pub waste_kg: u64,
    pub co2_kg: u64,
    pub scans: u64,
}

impl BuildingSummary {
    pub fn from_schedule(schedule: &PickupSchedule) -> Self {
        let projected = schedule.projected_waste_kg();
        Self {
            waste_kg: BASELINE_WASTE_KG + projected.round().max(0.0) as u64,
            co2_kg: BASELINE_CO2_KG + projected_co2_kg(projected),
            scans: BASELINE_BUILDING_SCANS + schedule.bookings.len() as u64,
        }
    }
}

/// Figures from this session's own scans.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LiveTotals {
    pub scans_logged: usize,
    pub recyclable_share: f64,
    pub total_co2_g: u64,
}

impl LiveTotals {
    pub fn from_log(log: &EprLog) -> Self {
        Self {
            scans_logged: log.len(),
            recyclable_share: log.recyclable_share(),
            total_co2_g: log.total_co2_g(),
        }
    }
}
