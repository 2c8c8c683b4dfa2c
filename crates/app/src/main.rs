use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy::winit::{UpdateMode, WinitSettings};

use simulation::scan_flow::CameraFeed;
use simulation::sim_rng::SimRng;

mod agent_mode;

/// Fixes the detection RNG seed, for reproducible demos.
const SEED_ENV: &str = "ECOSCAN_SEED";
/// Starts with the camera unavailable, to show the simulation-mode fallback.
const NO_CAMERA_ENV: &str = "ECOSCAN_NO_CAMERA";

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    if std::env::args().any(|arg| arg == "--agent") {
        agent_mode::run_agent_mode();
        return;
    }

    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "EcoScan".to_string(),
            resolution: (420.0, 860.0).into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }))
    .insert_resource(WinitSettings {
        focused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(16)),
        unfocused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(100)),
    })
    .insert_resource(seeded_rng());

    if std::env::var(NO_CAMERA_ENV).is_ok() {
        app.insert_resource(CameraFeed::unavailable());
    }

    app.add_plugins((simulation::SimulationPlugin, ui::UiPlugin));

    app.run();
}

/// `ECOSCAN_SEED` when set and numeric, otherwise a clock-derived seed.
fn seeded_rng() -> SimRng {
    match std::env::var(SEED_ENV).ok().and_then(|s| s.trim().parse::<u64>().ok()) {
        Some(seed) => {
            info!("using fixed seed {}", seed);
            SimRng::from_seed_u64(seed)
        }
        None => SimRng::from_entropy_clock(),
    }
}
