use super::*;
use crate::catalog::{MaterialType, ShapeType, WasteGroup};
use crate::detection::EprLogEntry;
use crate::epr_log::EprLog;
use crate::localization::Lang;

fn schedule() -> PickupSchedule {
    PickupSchedule::starting_at(CalendarMonth::new(2024, 2))
}

fn form(volume: &str, unit: VolumeUnit) -> BookingForm {
    BookingForm {
        kind: PickupType::Ewaste,
        volume: volume.to_string(),
        unit,
        location: String::new(),
        notes: String::new(),
    }
}

// =============================================================================
// Calendar
// =============================================================================

#[test]
fn test_days_in_month_handles_leap_years() {
    assert_eq!(days_in_month(2024, 2), 29);
    assert_eq!(days_in_month(2023, 2), 28);
    assert_eq!(days_in_month(1900, 2), 28);
    assert_eq!(days_in_month(2000, 2), 29);
    assert_eq!(days_in_month(2024, 4), 30);
    assert_eq!(days_in_month(2024, 12), 31);
}

#[test]
fn test_first_weekday_sunday_is_zero() {
    assert_eq!(first_weekday(2024, 1), 1);
    assert_eq!(first_weekday(2000, 1), 6);
    assert_eq!(first_weekday(2024, 2), 4);
    assert_eq!(first_weekday(2026, 10), 4);
}

#[test]
fn test_date_key_is_zero_padded() {
    assert_eq!(date_key(2024, 3, 7), "2024-03-07");
    assert_eq!(CalendarMonth::new(2025, 11).key(30), "2025-11-30");
}

#[test]
fn test_month_navigation_wraps_year() {
    let jan = CalendarMonth::new(2025, 1);
    assert_eq!(jan.prev(), CalendarMonth::new(2024, 12));
    assert_eq!(jan.prev().next(), jan);
    assert_eq!(CalendarMonth::new(2024, 12).next(), CalendarMonth::new(2025, 1));
}

#[test]
fn test_civil_date_from_millis() {
    assert_eq!(civil_date_from_millis(0), (1970, 1, 1));
    assert_eq!(civil_date_from_millis(951_782_400_000), (2000, 2, 29));
    assert_eq!(civil_date_from_millis(1_700_000_000_000), (2023, 11, 14));
}

#[test]
fn test_month_title_localized() {
    let m = CalendarMonth::new(2024, 3);
    assert_eq!(m.title(Lang::En), "March 2024");
    assert_eq!(m.title(Lang::Vi), "Tháng 3 2024");
}

// =============================================================================
// Booking
// =============================================================================

#[test]
fn test_submit_requires_date() {
    let mut s = schedule();
    assert_eq!(
        s.submit(&form("5", VolumeUnit::Kg)),
        Err(BookingError::MissingDate)
    );
    assert!(s.bookings.is_empty());
    assert!(!s.submitted);
}

#[test]
fn test_submit_requires_volume() {
    let mut s = schedule();
    s.select_day(10);
    assert_eq!(
        s.submit(&form("  ", VolumeUnit::Kg)),
        Err(BookingError::EmptyVolume)
    );
    assert!(s.bookings.is_empty());
}

#[test]
fn test_select_day_out_of_range_is_ignored() {
    let mut s = schedule();
    s.select_day(30);
    assert_eq!(s.selected_date, None);
    s.select_day(29);
    assert_eq!(s.selected_date.as_deref(), Some("2024-02-29"));
}

#[test]
fn test_unparsable_volume_stored_as_zero() {
    let mut s = schedule();
    s.select_day(1);
    s.submit(&form("lots", VolumeUnit::Kg)).unwrap();
    assert_eq!(s.bookings[0].volume, 0.0);
    assert!(s.submitted);
}

#[test]
fn test_projected_waste_converts_tons() {
    let mut s = schedule();
    s.select_day(3);
    s.submit(&form("250", VolumeUnit::Kg)).unwrap();
    s.submit(&form("1.5", VolumeUnit::Tons)).unwrap();
    assert_eq!(s.projected_waste_kg(), 1750.0);
    assert_eq!(s.bookings_on("2024-02-03"), 2);
}

#[test]
fn test_upcoming_shows_last_three_newest_first() {
    let mut s = schedule();
    for day in 1..=5 {
        s.select_day(day);
        s.submit(&form("1", VolumeUnit::Kg)).unwrap();
    }
    let dates: Vec<&str> = s.upcoming().iter().map(|b| b.date.as_str()).collect();
    assert_eq!(dates, vec!["2024-02-05", "2024-02-04", "2024-02-03"]);
}

#[test]
fn test_qr_tag_prefills_location() {
    let mut s = schedule();
    assert_eq!(s.scan_qr_tag(), QR_TAG_ADDRESS);
    assert_eq!(s.qr_location.as_deref(), Some(QR_TAG_ADDRESS));
    s.clear_qr();
    assert_eq!(s.qr_location, None);
}

// =============================================================================
// Report
// =============================================================================

#[test]
fn test_sector_totals() {
    let totals = sector_totals();
    assert_eq!(
        totals,
        vec![
            (Sector::Beverages, 938),
            (Sector::Dairy, 195),
            (Sector::FoodSnacks, 254),
            (Sector::Mixed, 145),
        ]
    );
    let sum: u32 = totals.iter().map(|(_, n)| n).sum();
    assert_eq!(sum, report_total_items());
}

#[test]
fn test_report_labels() {
    let other = EPR_REPORT.last().unwrap();
    assert_eq!(other.brand_label().get(Lang::Vi), "Địa phương/Khác");
    assert_eq!(other.category_label().get(Lang::En), "Mixed");
    assert_eq!(EPR_REPORT[0].brand_label().get(Lang::Vi), "Lavie");
    assert_eq!(Sector::FoodSnacks.label().get(Lang::En), "Food & Snacks");
}

#[test]
fn test_esg_breakdown_sums_to_hundred() {
    let total: u32 = ESG_BREAKDOWN.iter().map(|s| s.percent).sum();
    assert_eq!(total, 100);
}

#[test]
fn test_building_waste_totals() {
    assert_eq!(WASTE_BY_BUILDING[0].total(), 275);
    assert_eq!(WASTE_BY_BUILDING[2].by_material()[0], (MaterialType::Plastic, 150));
}

#[test]
fn test_building_summary_includes_bookings() {
    let mut s = schedule();
    assert_eq!(
        BuildingSummary::from_schedule(&s),
        BuildingSummary {
            waste_kg: 1245,
            co2_kg: 380,
            scans: 847
        }
    );
    s.select_day(9);
    s.submit(&form("0.1", VolumeUnit::Tons)).unwrap();
    assert_eq!(
        BuildingSummary::from_schedule(&s),
        BuildingSummary {
            waste_kg: 1345,
            co2_kg: 410,
            scans: 848
        }
    );
}

#[test]
fn test_live_totals_from_log() {
    let mut log = EprLog::default();
    log.push(EprLogEntry {
        brand: Some("Pepsi"),
        category: MaterialType::Metal,
        shape: ShapeType::Can,
        group: WasteGroup::Recyclable,
        recyclable: true,
        estimated_co2_g: 170,
        timestamp: 5,
    });
    let live = LiveTotals::from_log(&log);
    assert_eq!(live.scans_logged, 1);
    assert_eq!(live.recyclable_share, 1.0);
    assert_eq!(live.total_co2_g, 170);
}
