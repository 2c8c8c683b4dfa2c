//! The scan screen's lifecycle: capture, analysis, result review with the
//! learn prompt, disposal verification, and the sync that credits points.

mod camera;
mod receipt;
mod state;
mod systems;


pub use camera::{initialize_camera, CameraFeed, CameraFrame, CameraStatus};
pub use receipt::{draw_earned_points, generate_tx_hash, short_hash};
pub use state::{LearnAnswer, LearnPrompt, ScanError, ScanPhase, ScanSession};
pub use systems::{
    apply_scan_action, handle_scan_actions, reset_scan_on_leave, tick_learn_prompt,
    tick_scan_progress, ScanAction, ScanActionLog, ScanCompleted, ScanFlowPlugin, ScanTimers,
};
