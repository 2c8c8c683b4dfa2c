//! # TestApp: headless integration test harness
//!
//! Wraps `bevy::app::App` + `SimulationPlugin` for running integration tests
//! without a window. Time advances by a fixed [`FRAME`] per update, so timer
//! driven progress is reproducible.

use std::time::Duration;

use bevy::app::App;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;

use crate::app_state::Tab;
use crate::connectivity::Connectivity;
use crate::epr_log::EprLog;
use crate::points::PointsLedger;
use crate::scan_flow::{ScanAction, ScanActionLog, ScanError, ScanPhase, ScanSession};
use crate::sim_rng::SimRng;
use crate::SimulationPlugin;

/// Simulated time per update.
pub const FRAME: Duration = Duration::from_millis(50);

/// Upper bound for `run_until` loops so a broken flow fails instead of hanging.
const MAX_FRAMES: u32 = 10_000;

pub struct TestApp {
    app: App,
}

impl TestApp {
    // -----------------------------------------------------------------------
    // Constructors
    // -----------------------------------------------------------------------

    /// Fresh app with a fixed RNG seed.
    pub fn new() -> Self {
        Self::with_seed(crate::sim_rng::DEFAULT_SEED)
    }

    pub fn with_seed(seed: u64) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(StatesPlugin);
        app.insert_resource(TimeUpdateStrategy::ManualDuration(FRAME));
        // Inserted before the plugin so `init_resource` keeps it.
        app.insert_resource(SimRng::from_seed_u64(seed));
        app.add_plugins(SimulationPlugin);

        // First update runs Startup systems; its time delta is zero.
        app.update();
        Self { app }
    }

    // -----------------------------------------------------------------------
    // Driving
    // -----------------------------------------------------------------------

    /// Run `n` updates.
    pub fn tick(&mut self, n: u32) {
        for _ in 0..n {
            self.app.update();
        }
    }

    /// Send one scan action, run one update and return its outcome.
    pub fn act(&mut self, action: ScanAction) -> Result<(), ScanError> {
        self.app.world_mut().send_event(action);
        self.app.update();
        match self.resource::<ScanActionLog>().last.clone() {
            Some((_, outcome)) => outcome,
            None => panic!("scan action was not handled"),
        }
    }

    /// Update until the scan reaches `phase`. Returns the number of updates.
    pub fn run_until_phase(&mut self, phase: ScanPhase) -> u32 {
        let mut frames = 0;
        while self.session().phase != phase {
            assert!(
                frames < MAX_FRAMES,
                "scan stuck in {:?} waiting for {:?}",
                self.session().phase,
                phase
            );
            self.app.update();
            frames += 1;
        }
        frames
    }

    pub fn set_tab(&mut self, tab: Tab) {
        self.app
            .world_mut()
            .resource_mut::<NextState<Tab>>()
            .set(tab);
        self.app.update();
    }

    pub fn set_online(&mut self, online: bool) {
        self.app
            .world_mut()
            .resource_mut::<Connectivity>()
            .set_online(online);
    }

    pub fn send<E: Event>(&mut self, event: E) {
        self.app.world_mut().send_event(event);
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }

    pub fn resource<R: Resource>(&self) -> &R {
        self.app.world().resource::<R>()
    }

    pub fn session(&self) -> &ScanSession {
        self.resource::<ScanSession>()
    }

    pub fn ledger(&self) -> &PointsLedger {
        self.resource::<PointsLedger>()
    }

    pub fn epr_log(&self) -> &EprLog {
        self.resource::<EprLog>()
    }

    pub fn tab(&self) -> Tab {
        *self.resource::<State<Tab>>().get()
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}
