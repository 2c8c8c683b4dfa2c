use super::*;
use crate::catalog::MaterialType;
use crate::localization::LocalizedText;

const NOW: u64 = 1_700_000_000_000;

fn record(points: u32) -> ScanRecord {
    ScanRecord {
        item: LocalizedText::new("Lon kim loại", "Metal Can"),
        brand: None,
        category: MaterialType::Metal.label(),
        material: MaterialType::Metal,
        points,
        tx_hash: "0xabcd...1234".to_string(),
    }
}

// -------------------------------------------------------------------------
// Ledger
// -------------------------------------------------------------------------

#[test]
fn test_seeded_ledger_starting_balances() {
    let ledger = PointsLedger::seeded(NOW);
    assert_eq!(ledger.user_points(), 1920);
    assert_eq!(ledger.total_scans(), 47);
    assert_eq!(ledger.scan_history.len(), 5);
    assert_eq!(ledger.scan_history[0].record.brand, Some("Lavie"));
    assert_eq!(ledger.scan_history[0].timestamp, NOW - 2 * 3_600_000);
    assert_eq!(ledger.scan_history[2].record.brand, None);
    assert_eq!(ledger.scan_history[4].record.brand, Some("PepsiCo"));
}

#[test]
fn test_seeded_history_is_newest_first() {
    let ledger = PointsLedger::seeded(NOW);
    for pair in ledger.scan_history.windows(2) {
        assert!(pair[0].timestamp >= pair[1].timestamp);
    }
}

#[test]
fn test_add_points_and_scan() {
    let mut ledger = PointsLedger::seeded(NOW);
    ledger.add_points(25);
    ledger.add_scan();
    assert_eq!(ledger.user_points, 1945);
    assert_eq!(ledger.total_scans, 48);
}

#[test]
fn test_add_scan_entry_prepends_with_id_and_timestamp() {
    let mut ledger = PointsLedger::seeded(NOW);
    ledger.add_scan_entry(record(12), NOW + 5);
    ledger.add_scan_entry(record(13), NOW + 9);

    let newest = &ledger.scan_history[0];
    assert_eq!(newest.record.points, 13);
    assert_eq!(newest.timestamp, NOW + 9);
    assert_eq!(newest.id, format!("scan-{}-0001", NOW + 9));
    assert_eq!(ledger.scan_history[1].id, format!("scan-{}-0000", NOW + 5));
    assert_eq!(ledger.scan_history.len(), 7);
}

#[test]
fn test_entry_does_not_touch_balances() {
    let mut ledger = PointsLedger::seeded(NOW);
    ledger.add_scan_entry(record(20), NOW);
    assert_eq!(ledger.user_points, 1920);
    assert_eq!(ledger.total_scans, 47);
}

#[test]
fn test_recent_caps_at_history_len() {
    let ledger = PointsLedger::seeded(NOW);
    assert_eq!(ledger.recent(3).len(), 3);
    assert_eq!(ledger.recent(50).len(), 5);
}

#[test]
fn test_history_entry_serializes_flat() {
    let ledger = PointsLedger::seeded(NOW);
    let json = serde_json::to_value(&ledger.scan_history[1]).unwrap();
    assert_eq!(json["id"], "h2");
    assert_eq!(json["material"], "metal");
    assert_eq!(json["tx_hash"], "0x8b2e...d847");
    assert_eq!(json["item"]["en"], "Coca-Cola Can 330ml");
}

// -------------------------------------------------------------------------
// Ranks
// -------------------------------------------------------------------------

#[test]
fn test_rank_thresholds() {
    assert_eq!(rank_for(0).name.en, "Green");
    assert_eq!(rank_for(499).name.en, "Green");
    assert_eq!(rank_for(500).name.en, "Silver");
    assert_eq!(rank_for(1920).name.en, "Gold");
    assert_eq!(rank_for(3000).name.en, "Diamond");
    assert_eq!(rank_for(10_000).name.en, "Legend");
}

#[test]
fn test_next_rank_and_distance() {
    assert_eq!(next_rank(1920).map(|r| r.min_points), Some(3000));
    assert_eq!(points_to_next_rank(1920), Some(1080));
    assert_eq!(points_to_next_rank(0), Some(500));
    assert!(next_rank(5000).is_none());
    assert!(points_to_next_rank(7000).is_none());
}

#[test]
fn test_rank_levels_ascending() {
    assert_eq!(RANK_LEVELS[0].min_points, 0);
    for pair in RANK_LEVELS.windows(2) {
        assert!(pair[0].min_points < pair[1].min_points);
    }
}

// -------------------------------------------------------------------------
// Weekly goal
// -------------------------------------------------------------------------

#[test]
fn test_weekly_goal_at_baseline() {
    assert_eq!(weekly_goal_done(47), 12);
    assert_eq!(weekly_goal_remaining(47), 8);
    assert!((weekly_goal_fraction(47) - 0.6).abs() < 1e-6);
}

#[test]
fn test_weekly_goal_saturates() {
    assert_eq!(weekly_goal_remaining(55), 0);
    assert_eq!(weekly_goal_remaining(80), 0);
    assert_eq!(weekly_goal_done(80), 20);
    assert_eq!(weekly_goal_fraction(80), 1.0);
}

#[test]
fn test_weekly_goal_below_baseline_does_not_underflow() {
    assert_eq!(weekly_goal_done(0), 0);
    assert_eq!(weekly_goal_remaining(0), 20);
}

// -------------------------------------------------------------------------
// Leaderboard / vouchers
// -------------------------------------------------------------------------

#[test]
fn test_current_user_row_tracks_live_points() {
    let me = LEADERBOARD
        .iter()
        .find(|e| e.is_current_user())
        .unwrap();
    assert_eq!(leaderboard_points(me, 2001), 2001);
    assert_eq!(leaderboard_points(&LEADERBOARD[0], 2001), 2850);
}

#[test]
fn test_voucher_catalogue() {
    assert_eq!(VOUCHERS.len(), 4);
    assert_eq!(VOUCHERS[0].cost, 200);
    assert_eq!(VOUCHERS[3].name.en, "Aquafina Refill");
}
