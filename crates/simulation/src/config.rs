//! Fixed tuning constants for the scan simulation.
//!
//! The confidence values below are part of the disclosure contract: a brand
//! name may only be shown as fact when the perturbed confidence reaches
//! [`BRAND_CONFIDENCE_GATE`].

use std::time::Duration;

use bevy::prelude::*;

/// Minimum confidence (percent) at which a brand may be asserted.
pub const BRAND_CONFIDENCE_GATE: f64 = 90.0;

/// Lower clamp bound for a perturbed brand confidence.
pub const BRAND_CONFIDENCE_MIN: f64 = 68.0;
/// Upper clamp bound for a perturbed brand confidence.
pub const BRAND_CONFIDENCE_MAX: f64 = 99.9;

/// Half-width of the additive noise applied to a stored brand confidence.
pub const BRAND_CONFIDENCE_NOISE: f64 = 3.0;

/// Probability of attempting brand identification when eligible brands exist.
pub const BRAND_ATTEMPT_PROBABILITY: f64 = 0.65;

/// Generic results draw confidence from `[GENERIC_CONFIDENCE_MIN, GENERIC_CONFIDENCE_MIN + GENERIC_CONFIDENCE_SPAN)`.
pub const GENERIC_CONFIDENCE_MIN: f64 = 75.0;
pub const GENERIC_CONFIDENCE_SPAN: f64 = 14.0;

/// Earned points per completed scan are drawn from `MIN_EARNED_POINTS..MIN_EARNED_POINTS + EARNED_POINTS_SPAN`.
pub const MIN_EARNED_POINTS: u32 = 10;
pub const EARNED_POINTS_SPAN: usize = 20;

/// Progress bars run from 0 to this value.
pub const PROGRESS_COMPLETE: u8 = 100;

pub const ANALYSIS_STEP: u8 = 2;
pub const SYNC_STEP: u8 = 4;

pub const ANALYSIS_TICK_ONLINE: Duration = Duration::from_millis(50);
pub const ANALYSIS_TICK_OFFLINE: Duration = Duration::from_millis(40);
pub const SYNC_TICK: Duration = Duration::from_millis(50);

/// How long the "thank you" note stays up after the user answers a learn prompt.
pub const LEARN_THANK_YOU: Duration = Duration::from_secs(2);

/// Weekly scan target shown on the home and scan tabs.
pub const WEEKLY_GOAL_SCANS: u32 = 20;
/// Scans already counted towards this week's goal at the baseline scan total.
pub const WEEKLY_GOAL_DONE_AT_BASELINE: u32 = 12;

/// Starting balances for the demo account.
pub const INITIAL_USER_POINTS: u32 = 1920;
pub const INITIAL_TOTAL_SCANS: u32 = 47;

/// Simulated camera frame size.
pub const CAMERA_FRAME_SIZE: u32 = 640;

/// Runtime timing for the two progress animations.
///
/// Defaults mirror the constants above; tests and the headless agent shorten
/// or lengthen them without touching the decision logic.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct ScanConfig {
    pub analysis_tick_online: Duration,
    pub analysis_tick_offline: Duration,
    pub sync_tick: Duration,
    pub analysis_step: u8,
    pub sync_step: u8,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            analysis_tick_online: ANALYSIS_TICK_ONLINE,
            analysis_tick_offline: ANALYSIS_TICK_OFFLINE,
            sync_tick: SYNC_TICK,
            analysis_step: ANALYSIS_STEP,
            sync_step: SYNC_STEP,
        }
    }
}

impl ScanConfig {
    /// Offline analysis runs on the faster local-processing tick.
    pub fn analysis_tick(&self, online: bool) -> Duration {
        if online {
            self.analysis_tick_online
        } else {
            self.analysis_tick_offline
        }
    }
}
