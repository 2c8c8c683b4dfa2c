//! Per-frame ordering via `SystemSet` phases.
//!
//! Every simulation system runs in `Update` inside one of these sets:
//!
//! ```text
//! Input  →  Simulation
//! ```
//!
//! * **Input** – Drains user action events (scan actions, dashboard actions,
//!   language and connectivity toggles) and applies them to resources.
//! * **Simulation** – Time-driven progress: analysis and sync progress bars,
//!   the learn-prompt "thank you" countdown.
//!
//! Running actions first means an action and the progress it unlocks are
//! visible in the same frame, and the UI (which only reads resources and
//! sends events) always draws a settled state.

use bevy::prelude::*;

/// Ordered phases for systems running in the `Update` schedule.
///
/// Configured as a chain: `Input` → `Simulation`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    /// Event-driven state changes.
    Input,
    /// Timer-driven state changes.
    Simulation,
}
