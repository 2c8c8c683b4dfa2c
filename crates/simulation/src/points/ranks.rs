//! Green Ambassador rank ladder.

use serde::Serialize;

use crate::localization::LocalizedText;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RankLevel {
    pub name: LocalizedText,
    pub min_points: u32,
}

/// Ascending by threshold; the first level starts at zero.
pub static RANK_LEVELS: &[RankLevel] = &[
    RankLevel {
        name: LocalizedText::new("Xanh Lá", "Green"),
        min_points: 0,
    },
    RankLevel {
        name: LocalizedText::new("Bạc", "Silver"),
        min_points: 500,
    },
    RankLevel {
        name: LocalizedText::new("Vàng", "Gold"),
        min_points: 1500,
    },
    RankLevel {
        name: LocalizedText::new("Kim Cương", "Diamond"),
        min_points: 3000,
    },
    RankLevel {
        name: LocalizedText::new("Huyền Thoại", "Legend"),
        min_points: 5000,
    },
];

/// Highest level whose threshold `points` has reached.
pub fn rank_for(points: u32) -> &'static RankLevel {
    RANK_LEVELS
        .iter()
        .rev()
        .find(|level| points >= level.min_points)
        .unwrap_or(&RANK_LEVELS[0])
}

/// First level not yet reached, `None` at the top.
pub fn next_rank(points: u32) -> Option<&'static RankLevel> {
    RANK_LEVELS.iter().find(|level| points < level.min_points)
}

pub fn points_to_next_rank(points: u32) -> Option<u32> {
    next_rank(points).map(|level| level.min_points - points)
}
