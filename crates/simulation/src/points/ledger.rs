//! Eco-point balance, scan counter and scan history.

use bevy::prelude::*;
use serde::Serialize;

use crate::catalog::MaterialType;
use crate::config::{INITIAL_TOTAL_SCANS, INITIAL_USER_POINTS};
use crate::localization::LocalizedText;

const HOUR_MS: u64 = 3_600_000;
const ID_SUFFIX_LEN: usize = 4;
const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// What the scan flow reports for one completed cycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanRecord {
    pub item: LocalizedText,
    pub brand: Option<&'static str>,
    /// Localized material label.
    pub category: LocalizedText,
    pub material: MaterialType,
    pub points: u32,
    /// Display-truncated transaction hash.
    pub tx_hash: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanHistoryEntry {
    pub id: String,
    #[serde(flatten)]
    pub record: ScanRecord,
    /// Unix milliseconds.
    pub timestamp: u64,
}

/// The collaborator the scan flow credits on sync completion.
pub trait RewardsLedger {
    fn add_points(&mut self, amount: u32);
    fn add_scan(&mut self);
    fn add_scan_entry(&mut self, record: ScanRecord, now_ms: u64);
    fn user_points(&self) -> u32;
    fn total_scans(&self) -> u32;
}

#[derive(Resource, Debug, Clone)]
pub struct PointsLedger {
    pub user_points: u32,
    pub total_scans: u32,
    /// Newest first.
    pub scan_history: Vec<ScanHistoryEntry>,
    next_entry_seq: u32,
}

impl Default for PointsLedger {
    fn default() -> Self {
        Self::seeded(crate::now_millis())
    }
}

impl PointsLedger {
    /// Demo account with five past scans, timestamped relative to `now_ms`.
    pub fn seeded(now_ms: u64) -> Self {
        let ago = |hours: u64| now_ms.saturating_sub(hours * HOUR_MS);

        let scan_history = vec![
            seeded_entry(
                "h1",
                LocalizedText::new("Chai nước Lavie 500ml PET", "Lavie 500ml PET Bottle"),
                Some("Lavie"),
                MaterialType::Plastic,
                15,
                "0x7a3f...c912",
                ago(2),
            ),
            seeded_entry(
                "h2",
                LocalizedText::new("Lon Coca-Cola 330ml", "Coca-Cola Can 330ml"),
                Some("Coca-Cola"),
                MaterialType::Metal,
                20,
                "0x8b2e...d847",
                ago(5),
            ),
            seeded_entry(
                "h3",
                LocalizedText::new("Báo giấy", "Newspaper"),
                None,
                MaterialType::Paper,
                10,
                "0x4c1d...e593",
                ago(24),
            ),
            seeded_entry(
                "h4",
                LocalizedText::new("Chai Heineken 330ml", "Heineken Bottle 330ml"),
                Some("Heineken"),
                MaterialType::Glass,
                18,
                "0x9f5a...b261",
                ago(24),
            ),
            seeded_entry(
                "h5",
                LocalizedText::new("Chai Sting PET 330ml", "Sting PET 330ml"),
                Some("PepsiCo"),
                MaterialType::Plastic,
                15,
                "0x2d8c...f734",
                ago(48),
            ),
        ];

        Self {
            user_points: INITIAL_USER_POINTS,
            total_scans: INITIAL_TOTAL_SCANS,
            scan_history,
            next_entry_seq: 0,
        }
    }

    /// The `n` most recent entries.
    pub fn recent(&self, n: usize) -> &[ScanHistoryEntry] {
        &self.scan_history[..n.min(self.scan_history.len())]
    }

    fn next_entry_id(&mut self, now_ms: u64) -> String {
        let seq = self.next_entry_seq;
        self.next_entry_seq = self.next_entry_seq.wrapping_add(1);
        format!("scan-{now_ms}-{}", base36_suffix(seq))
    }
}

impl RewardsLedger for PointsLedger {
    fn add_points(&mut self, amount: u32) {
        self.user_points = self.user_points.saturating_add(amount);
    }

    fn add_scan(&mut self) {
        self.total_scans = self.total_scans.saturating_add(1);
    }

    fn add_scan_entry(&mut self, record: ScanRecord, now_ms: u64) {
        let id = self.next_entry_id(now_ms);
        self.scan_history.insert(
            0,
            ScanHistoryEntry {
                id,
                record,
                timestamp: now_ms,
            },
        );
    }

    fn user_points(&self) -> u32 {
        self.user_points
    }

    fn total_scans(&self) -> u32 {
        self.total_scans
    }
}

fn seeded_entry(
    id: &str,
    item: LocalizedText,
    brand: Option<&'static str>,
    material: MaterialType,
    points: u32,
    tx_hash: &str,
    timestamp: u64,
) -> ScanHistoryEntry {
    ScanHistoryEntry {
        id: id.to_string(),
        record: ScanRecord {
            item,
            brand,
            category: material.label(),
            material,
            points,
            tx_hash: tx_hash.to_string(),
        },
        timestamp,
    }
}

/// Fixed-width lowercase base-36 rendering of the low digits of `seq`.
fn base36_suffix(mut seq: u32) -> String {
    let mut digits = [b'0'; ID_SUFFIX_LEN];
    for slot in digits.iter_mut().rev() {
        *slot = BASE36[(seq % 36) as usize];
        seq /= 36;
    }
    digits.iter().map(|&b| b as char).collect()
}
