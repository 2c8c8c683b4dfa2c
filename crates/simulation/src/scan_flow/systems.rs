//! Scan flow systems and plugin registration.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::camera::{initialize_camera, CameraFeed};
use super::state::{ScanError, ScanPhase, ScanSession};
use crate::app_state::Tab;
use crate::catalog::MaterialType;
use crate::config::ScanConfig;
use crate::connectivity::Connectivity;
use crate::epr_log::EprLog;
use crate::points::PointsLedger;
use crate::sim_rng::SimRng;
use crate::SimulationSet;

/// A user action on the scan screen.
#[derive(Event, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ScanAction {
    Capture,
    Verify,
    CaptureProof,
    Reset,
    ConfirmMaterial { material: MaterialType },
    ConfirmBrand,
    ChooseBrand { brand: String },
    OtherBrand,
}

/// Fired once per completed cycle, after the ledger is credited.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct ScanCompleted {
    pub points: u32,
    pub tx_hash: String,
}

/// Outcome of the most recent [`ScanAction`], for callers that need a reply.
#[derive(Resource, Debug, Clone, Default)]
pub struct ScanActionLog {
    pub last: Option<(ScanAction, Result<(), ScanError>)>,
}

/// Repeating timers for the two progress animations.
#[derive(Resource, Debug, Clone)]
pub struct ScanTimers {
    pub analysis: Timer,
    pub sync: Timer,
}

impl Default for ScanTimers {
    fn default() -> Self {
        let config = ScanConfig::default();
        Self {
            analysis: Timer::new(config.analysis_tick(true), TimerMode::Repeating),
            sync: Timer::new(config.sync_tick, TimerMode::Repeating),
        }
    }
}

/// Apply one action to the session, grabbing a camera frame where needed.
pub fn apply_scan_action(
    session: &mut ScanSession,
    camera: &mut CameraFeed,
    action: &ScanAction,
    now_ms: u64,
) -> Result<(), ScanError> {
    match action {
        ScanAction::Capture => session.capture(camera.capture(now_ms)),
        ScanAction::Verify => session.start_verification(),
        ScanAction::CaptureProof => session.capture_disposal_proof(camera.capture(now_ms)),
        ScanAction::Reset => {
            session.reset();
            Ok(())
        }
        ScanAction::ConfirmMaterial { material } => session.confirm_material(*material),
        ScanAction::ConfirmBrand => session.confirm_suggested_brand(),
        ScanAction::ChooseBrand { brand } => session.choose_alternative_brand(brand),
        ScanAction::OtherBrand => session.answer_other_brand(),
    }
}

pub fn handle_scan_actions(
    mut actions: EventReader<ScanAction>,
    mut session: ResMut<ScanSession>,
    mut camera: ResMut<CameraFeed>,
    mut timers: ResMut<ScanTimers>,
    mut log: ResMut<ScanActionLog>,
) {
    for action in actions.read() {
        let before = session.phase;
        let outcome = apply_scan_action(&mut session, &mut camera, action, crate::now_millis());
        match &outcome {
            Ok(()) if session.phase != before => {
                info!("scan phase {} -> {}", before.name(), session.phase.name());
                if session.phase == ScanPhase::Analyzing {
                    timers.analysis.reset();
                }
                if session.phase == ScanPhase::Syncing {
                    timers.sync.reset();
                }
            }
            Ok(()) => {}
            Err(err) => warn!("scan action {:?} rejected: {}", action, err),
        }
        log.last = Some((action.clone(), outcome));
    }
}

/// Drive whichever progress bar is active.
#[allow(clippy::too_many_arguments)]
pub fn tick_scan_progress(
    time: Res<Time>,
    config: Res<ScanConfig>,
    connectivity: Res<Connectivity>,
    mut timers: ResMut<ScanTimers>,
    mut session: ResMut<ScanSession>,
    mut rng: ResMut<SimRng>,
    mut epr_log: ResMut<EprLog>,
    mut ledger: ResMut<PointsLedger>,
    mut completed: EventWriter<ScanCompleted>,
) {
    match session.phase {
        ScanPhase::Analyzing => {
            let interval = config.analysis_tick(connectivity.online);
            if timers.analysis.duration() != interval {
                timers.analysis.set_duration(interval);
            }
            timers.analysis.tick(time.delta());
            for _ in 0..timers.analysis.times_finished_this_tick() {
                let done = session.advance_analysis(
                    config.analysis_step,
                    &mut *rng,
                    &mut *epr_log,
                    crate::now_millis(),
                );
                if done {
                    log_detection(&session);
                    break;
                }
            }
        }
        ScanPhase::Syncing => {
            if timers.sync.duration() != config.sync_tick {
                timers.sync.set_duration(config.sync_tick);
            }
            timers.sync.tick(time.delta());
            for _ in 0..timers.sync.times_finished_this_tick() {
                if session.advance_sync(config.sync_step, &mut *ledger, crate::now_millis()) {
                    info!(
                        "scan synced: +{} points, balance {}, {} scans",
                        session.earned_points, ledger.user_points, ledger.total_scans
                    );
                    completed.send(ScanCompleted {
                        points: session.earned_points,
                        tx_hash: session.display_hash().unwrap_or_default(),
                    });
                    break;
                }
            }
        }
        _ => {}
    }
}

fn log_detection(session: &ScanSession) {
    let Some(result) = &session.result else {
        return;
    };
    match (result.brand, result.low_confidence_brand) {
        (Some(brand), _) => info!(
            "detected {:?} {:?}: brand {} at {:.1}%",
            result.shape, result.material, brand, result.confidence
        ),
        (None, Some(suggested)) => info!(
            "detected {:?} {:?}: brand withheld ({} suggested) at {:.1}%",
            result.shape, result.material, suggested, result.confidence
        ),
        (None, None) => info!(
            "detected {:?} {:?}: generic at {:.1}%",
            result.shape, result.material, result.confidence
        ),
    }
}

pub fn tick_learn_prompt(time: Res<Time>, mut session: ResMut<ScanSession>) {
    if session.thank_you_visible() {
        session.tick_learn(time.delta());
    }
}

/// Leaving the scan tab stops the flow, as closing the camera view does.
pub fn reset_scan_on_leave(mut session: ResMut<ScanSession>) {
    if session.phase != ScanPhase::Idle {
        info!("scan abandoned in {} phase", session.phase.name());
    }
    session.reset();
}

pub struct ScanFlowPlugin;

impl Plugin for ScanFlowPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ScanSession>()
            .init_resource::<CameraFeed>()
            .init_resource::<ScanTimers>()
            .init_resource::<ScanActionLog>()
            .init_resource::<ScanConfig>()
            .add_event::<ScanAction>()
            .add_event::<ScanCompleted>()
            .add_systems(Startup, initialize_camera)
            .add_systems(
                Update,
                (
                    handle_scan_actions.in_set(SimulationSet::Input),
                    (tick_scan_progress, tick_learn_prompt).in_set(SimulationSet::Simulation),
                ),
            )
            .add_systems(OnExit(Tab::Scan), reset_scan_on_leave);
    }
}
