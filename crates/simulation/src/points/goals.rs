//! Weekly scan goal.

use crate::config::{INITIAL_TOTAL_SCANS, WEEKLY_GOAL_DONE_AT_BASELINE, WEEKLY_GOAL_SCANS};

/// Scans counted towards this week's goal, capped at the target.
pub fn weekly_goal_done(total_scans: u32) -> u32 {
    let done = i64::from(WEEKLY_GOAL_DONE_AT_BASELINE) + i64::from(total_scans)
        - i64::from(INITIAL_TOTAL_SCANS);
    done.clamp(0, i64::from(WEEKLY_GOAL_SCANS)) as u32
}

/// Scans still needed this week, never negative.
pub fn weekly_goal_remaining(total_scans: u32) -> u32 {
    WEEKLY_GOAL_SCANS - weekly_goal_done(total_scans)
}

/// Progress towards the weekly target in `[0, 1]`.
pub fn weekly_goal_fraction(total_scans: u32) -> f32 {
    weekly_goal_done(total_scans) as f32 / WEEKLY_GOAL_SCANS as f32
}
