//! Eco-points: the rewards ledger, rank ladder, weekly goal and the static
//! leaderboard/voucher tables.
//!
//! [`PointsLedger`] is the single owner of the user's balance and history.
//! The scan flow writes to it only through [`RewardsLedger`].

mod goals;
mod ledger;
mod ranks;
mod rewards;

#[cfg(test)]
mod tests;

use bevy::prelude::*;

pub use goals::{weekly_goal_done, weekly_goal_fraction, weekly_goal_remaining};
pub use ledger::{PointsLedger, RewardsLedger, ScanHistoryEntry, ScanRecord};
pub use ranks::{next_rank, points_to_next_rank, rank_for, RankLevel, RANK_LEVELS};
pub use rewards::{
    leaderboard_points, LeaderboardEntry, Voucher, CURRENT_USER_INITIALS, CURRENT_USER_NAME,
    LEADERBOARD, POINTS_PER_TREE, VOUCHERS,
};

pub struct PointsPlugin;

impl Plugin for PointsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PointsLedger>();
    }
}
