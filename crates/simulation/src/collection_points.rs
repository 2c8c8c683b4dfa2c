//! Hardcoded collection points for the map tab, with kind filter and search.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointKind {
    Recycling,
    Ewaste,
}

impl PointKind {
    pub fn label_key(self) -> &'static str {
        match self {
            PointKind::Recycling => "recycling_hub",
            PointKind::Ewaste => "e_waste_bin",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CollectionPoint {
    pub id: u32,
    pub name: &'static str,
    pub kind: PointKind,
    pub address: &'static str,
    /// Pre-formatted, e.g. `"0.8 km"`.
    pub distance: &'static str,
    pub verified: bool,
    pub lat: f64,
    pub lng: f64,
}

pub static COLLECTION_POINTS: &[CollectionPoint] = &[
    CollectionPoint {
        id: 1,
        name: "URENCO Green Hub",
        kind: PointKind::Recycling,
        address: "45 Nguyen Trai, Thanh Xuan, Ha Noi",
        distance: "0.8 km",
        verified: true,
        lat: 21.003,
        lng: 105.82,
    },
    CollectionPoint {
        id: 2,
        name: "VinEco Collection Point",
        kind: PointKind::Recycling,
        address: "112 Le Van Luong, Cau Giay, Ha Noi",
        distance: "1.2 km",
        verified: true,
        lat: 21.007,
        lng: 105.79,
    },
    CollectionPoint {
        id: 3,
        name: "E-waste Smart Bin #47",
        kind: PointKind::Ewaste,
        address: "Royal City, 72A Nguyen Trai",
        distance: "1.5 km",
        verified: true,
        lat: 20.998,
        lng: 105.815,
    },
    CollectionPoint {
        id: 4,
        name: "Green Point Keangnam",
        kind: PointKind::Recycling,
        address: "Keangnam Landmark, Pham Hung",
        distance: "2.1 km",
        verified: true,
        lat: 21.015,
        lng: 105.78,
    },
    CollectionPoint {
        id: 5,
        name: "E-waste Drop-off Center",
        kind: PointKind::Ewaste,
        address: "88 Tran Duy Hung, Cau Giay",
        distance: "2.4 km",
        verified: false,
        lat: 21.009,
        lng: 105.795,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointFilter {
    #[default]
    All,
    Recycling,
    Ewaste,
}

impl PointFilter {
    pub fn all() -> &'static [PointFilter] {
        &[PointFilter::All, PointFilter::Recycling, PointFilter::Ewaste]
    }

    pub fn label_key(self) -> &'static str {
        match self {
            PointFilter::All => "all",
            PointFilter::Recycling => PointKind::Recycling.label_key(),
            PointFilter::Ewaste => PointKind::Ewaste.label_key(),
        }
    }

    pub fn matches(self, kind: PointKind) -> bool {
        match self {
            PointFilter::All => true,
            PointFilter::Recycling => kind == PointKind::Recycling,
            PointFilter::Ewaste => kind == PointKind::Ewaste,
        }
    }
}

/// Map tab selection state.
#[derive(Resource, Debug, Clone, Default)]
pub struct CollectionMapState {
    pub filter: PointFilter,
    pub search: String,
}

impl CollectionMapState {
    pub fn visible(&self) -> Vec<&'static CollectionPoint> {
        filter_points(self.filter, &self.search)
    }
}

/// Points of the selected kind whose name or address contains `search`,
/// ignoring case. An empty search matches everything.
pub fn filter_points(filter: PointFilter, search: &str) -> Vec<&'static CollectionPoint> {
    let needle = search.trim().to_lowercase();
    COLLECTION_POINTS
        .iter()
        .filter(|p| filter.matches(p.kind))
        .filter(|p| {
            needle.is_empty()
                || p.name.to_lowercase().contains(&needle)
                || p.address.to_lowercase().contains(&needle)
        })
        .collect()
}

pub struct CollectionPointsPlugin;

impl Plugin for CollectionPointsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CollectionMapState>();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_filter_returns_every_point() {
        assert_eq!(filter_points(PointFilter::All, "").len(), 5);
    }

    #[test]
    fn test_kind_filter() {
        let ewaste = filter_points(PointFilter::Ewaste, "");
        assert_eq!(ewaste.len(), 2);
        assert!(ewaste.iter().all(|p| p.kind == PointKind::Ewaste));
        assert_eq!(filter_points(PointFilter::Recycling, "").len(), 3);
    }

    #[test]
    fn test_search_is_case_insensitive_over_name_and_address() {
        let by_name = filter_points(PointFilter::All, "keangnam");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].id, 4);

        let by_address = filter_points(PointFilter::All, "NGUYEN TRAI");
        let ids: Vec<u32> = by_address.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_filter_and_search_combine() {
        let hits = filter_points(PointFilter::Recycling, "cau giay");
        let ids: Vec<u32> = hits.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2]);
        assert!(filter_points(PointFilter::Ewaste, "urenco").is_empty());
    }

    #[test]
    fn test_state_visible_uses_both_fields() {
        let state = CollectionMapState {
            filter: PointFilter::Ewaste,
            search: "smart".to_string(),
        };
        assert_eq!(state.visible().len(), 1);
    }
}
