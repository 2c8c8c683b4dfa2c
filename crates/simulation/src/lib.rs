use std::time::{SystemTime, UNIX_EPOCH};

use bevy::prelude::*;

pub mod agent_protocol;
pub mod app_state;
pub mod catalog;
pub mod collection_points;
pub mod config;
pub mod connectivity;
pub mod dashboard;
pub mod detection;
pub mod epr_log;
pub mod localization;
mod plugin_registration;
pub mod points;
pub mod scan_flow;
pub mod sim_rng;
pub mod simulation_sets;

#[cfg(test)]
pub mod test_harness;

pub use simulation_sets::SimulationSet;

/// Wall-clock Unix milliseconds. A clock before the epoch reads as 0.
pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (SimulationSet::Input, SimulationSet::Simulation).chain(),
        );

        plugin_registration::register_feature_plugins(app);
    }
}
