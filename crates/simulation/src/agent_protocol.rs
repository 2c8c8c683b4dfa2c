//! Agent text protocol types for the `--agent` headless mode.
//!
//! Defines the JSON command/response envelope that scripts and test drivers
//! use to run the scan flow over newline-delimited JSON on stdin/stdout.
//!
//! These types live in the `simulation` crate so they can be unit-tested
//! without pulling in the app binary. The I/O loop lives in
//! `crates/app/src/agent_mode.rs`.

use std::time::Duration;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::catalog::MaterialType;
use crate::connectivity::Connectivity;
use crate::detection::{DetectionResult, EprLogEntry};
use crate::epr_log::EprLog;
use crate::localization::{Lang, LocalizationState};
use crate::points::PointsLedger;
use crate::scan_flow::{CameraFeed, CameraStatus, LearnPrompt, ScanAction, ScanPhase, ScanSession};

// ---------------------------------------------------------------------------
// Commands (stdin → simulation)
// ---------------------------------------------------------------------------

/// A single command sent by the driver over stdin.
///
/// Each line of stdin is parsed as one `AgentCommand`. The `cmd` field acts as
/// the discriminator tag.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "cmd")]
pub enum AgentCommand {
    /// Take the item photo and start analysis.
    #[serde(rename = "capture")]
    Capture,

    /// Move from the result screen to disposal verification.
    #[serde(rename = "verify")]
    Verify,

    /// Capture the disposal proof and start the sync.
    #[serde(rename = "prove")]
    Prove,

    /// Abandon the current scan.
    #[serde(rename = "reset")]
    Reset,

    /// Advance `n` frames of simulated time.
    #[serde(rename = "tick")]
    Tick { n: u32 },

    /// Answer the learn prompt with a material.
    #[serde(rename = "confirm_material")]
    ConfirmMaterial { material: MaterialType },

    /// Accept the suggested low-confidence brand.
    #[serde(rename = "confirm_brand")]
    ConfirmBrand,

    /// Pick one of the offered alternative brands.
    #[serde(rename = "choose_brand")]
    ChooseBrand { brand: String },

    /// Answer "some other brand".
    #[serde(rename = "other_brand")]
    OtherBrand,

    /// Switch between Vietnamese and English.
    #[serde(rename = "toggle_lang")]
    ToggleLang,

    /// Go on- or offline.
    #[serde(rename = "set_online")]
    SetOnline { online: bool },

    /// Request the current session snapshot.
    #[serde(rename = "status")]
    Status,

    /// Dump the session EPR log.
    #[serde(rename = "epr_log")]
    EprLog,

    /// End the session.
    #[serde(rename = "quit")]
    Quit,
}

impl AgentCommand {
    /// The scan-screen action this command maps to, if any.
    pub fn scan_action(&self) -> Option<ScanAction> {
        match self {
            AgentCommand::Capture => Some(ScanAction::Capture),
            AgentCommand::Verify => Some(ScanAction::Verify),
            AgentCommand::Prove => Some(ScanAction::CaptureProof),
            AgentCommand::Reset => Some(ScanAction::Reset),
            AgentCommand::ConfirmMaterial { material } => Some(ScanAction::ConfirmMaterial {
                material: *material,
            }),
            AgentCommand::ConfirmBrand => Some(ScanAction::ConfirmBrand),
            AgentCommand::ChooseBrand { brand } => Some(ScanAction::ChooseBrand {
                brand: brand.clone(),
            }),
            AgentCommand::OtherBrand => Some(ScanAction::OtherBrand),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

/// Everything a driver needs to see after a command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub phase: ScanPhase,
    pub analysis_progress: u8,
    pub sync_progress: u8,
    pub result: Option<DetectionResult>,
    pub learn_prompt: Option<LearnPrompt>,
    pub tx_hash: Option<String>,
    pub earned_points: u32,
    pub user_points: u32,
    pub total_scans: u32,
    pub lang: Lang,
    pub online: bool,
    pub camera: CameraStatus,
    pub epr_entries: usize,
}

impl SessionSnapshot {
    pub fn from_world(world: &World) -> Self {
        let session = world.resource::<ScanSession>();
        let ledger = world.resource::<PointsLedger>();
        Self {
            phase: session.phase,
            analysis_progress: session.analysis_progress,
            sync_progress: session.sync_progress,
            result: session.result.clone(),
            learn_prompt: session.learn_prompt(),
            tx_hash: session.display_hash(),
            earned_points: session.earned_points,
            user_points: ledger.user_points,
            total_scans: ledger.total_scans,
            lang: world.resource::<LocalizationState>().lang,
            online: world.resource::<Connectivity>().online,
            camera: world.resource::<CameraFeed>().status,
            epr_entries: world.resource::<EprLog>().len(),
        }
    }
}

// ---------------------------------------------------------------------------
// Responses (simulation → stdout)
// ---------------------------------------------------------------------------

/// Every response includes the protocol version and a tagged payload.
#[derive(Debug, Serialize)]
pub struct AgentResponse {
    pub protocol_version: u32,
    #[serde(flatten)]
    pub payload: ResponsePayload,
}

/// Tagged payload variants for agent responses.
#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum ResponsePayload {
    /// The simulation is ready to accept commands.
    #[serde(rename = "ready")]
    Ready,

    /// Session state after the command.
    #[serde(rename = "status")]
    Status { snapshot: SessionSnapshot },

    #[serde(rename = "epr_log")]
    EprLog { entries: Vec<EprLogEntry> },

    /// The command could not be parsed or was rejected.
    #[serde(rename = "error")]
    Error { message: String },

    /// The session is ending (response to `quit`).
    #[serde(rename = "goodbye")]
    Goodbye,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Current protocol version. Bump when the command/response schema changes.
pub const PROTOCOL_VERSION: u32 = 1;

/// Simulated time per agent frame.
pub const AGENT_FRAME: Duration = Duration::from_millis(50);

/// Upper bound on frames for a single `tick` command.
pub const MAX_TICKS_PER_COMMAND: u32 = 10_000;

/// Wraps a payload with the current protocol version.
pub fn make_response(payload: ResponsePayload) -> AgentResponse {
    AgentResponse {
        protocol_version: PROTOCOL_VERSION,
        payload,
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_capture_command() {
        let cmd: AgentCommand = serde_json::from_str(r#"{"cmd":"capture"}"#).unwrap();
        assert_eq!(cmd, AgentCommand::Capture);
        assert_eq!(cmd.scan_action(), Some(ScanAction::Capture));
    }

    #[test]
    fn deserialize_tick_command() {
        let cmd: AgentCommand = serde_json::from_str(r#"{"cmd":"tick","n":50}"#).unwrap();
        assert_eq!(cmd, AgentCommand::Tick { n: 50 });
        assert_eq!(cmd.scan_action(), None);
    }

    #[test]
    fn deserialize_confirm_material_command() {
        let json = r#"{"cmd":"confirm_material","material":"metal"}"#;
        let cmd: AgentCommand = serde_json::from_str(json).unwrap();
        assert_eq!(
            cmd.scan_action(),
            Some(ScanAction::ConfirmMaterial {
                material: MaterialType::Metal
            })
        );
    }

    #[test]
    fn deserialize_prove_maps_to_capture_proof() {
        let cmd: AgentCommand = serde_json::from_str(r#"{"cmd":"prove"}"#).unwrap();
        assert_eq!(cmd.scan_action(), Some(ScanAction::CaptureProof));
    }

    #[test]
    fn deserialize_choose_brand_command() {
        let json = r#"{"cmd":"choose_brand","brand":"Acecook"}"#;
        let cmd: AgentCommand = serde_json::from_str(json).unwrap();
        assert_eq!(
            cmd,
            AgentCommand::ChooseBrand {
                brand: "Acecook".to_string()
            }
        );
    }

    #[test]
    fn deserialize_set_online_command() {
        let json = r#"{"cmd":"set_online","online":false}"#;
        let cmd: AgentCommand = serde_json::from_str(json).unwrap();
        assert_eq!(cmd, AgentCommand::SetOnline { online: false });
    }

    #[test]
    fn unknown_material_is_a_parse_error() {
        let json = r#"{"cmd":"confirm_material","material":"wood"}"#;
        assert!(serde_json::from_str::<AgentCommand>(json).is_err());
    }

    #[test]
    fn invalid_command_returns_parse_error() {
        let result = serde_json::from_str::<AgentCommand>(r#"{"cmd":"nonexistent"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn malformed_json_returns_parse_error() {
        assert!(serde_json::from_str::<AgentCommand>(r#"{not valid json"#).is_err());
    }

    #[test]
    fn serialize_ready_response() {
        let json = serde_json::to_string(&make_response(ResponsePayload::Ready)).unwrap();
        assert!(json.contains("\"protocol_version\":1"));
        assert!(json.contains("\"type\":\"ready\""));
    }

    #[test]
    fn serialize_error_response() {
        let resp = make_response(ResponsePayload::Error {
            message: "cannot verify while idle".to_string(),
        });
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"type\":\"error\""));
        assert!(json.contains("cannot verify while idle"));
    }

    #[test]
    fn serialize_goodbye_response() {
        let json = serde_json::to_string(&make_response(ResponsePayload::Goodbye)).unwrap();
        assert!(json.contains("\"type\":\"goodbye\""));
    }

    #[test]
    fn serialize_status_response() {
        let snapshot = SessionSnapshot {
            phase: ScanPhase::Analyzing,
            analysis_progress: 40,
            sync_progress: 0,
            result: None,
            learn_prompt: None,
            tx_hash: None,
            earned_points: 0,
            user_points: 1920,
            total_scans: 47,
            lang: Lang::Vi,
            online: true,
            camera: CameraStatus::Ready,
            epr_entries: 0,
        };
        let resp = make_response(ResponsePayload::Status { snapshot });
        let value: serde_json::Value = serde_json::to_value(&resp).unwrap();
        assert_eq!(value["type"], "status");
        assert_eq!(value["snapshot"]["phase"], "analyzing");
        assert_eq!(value["snapshot"]["analysis_progress"], 40);
        assert_eq!(value["snapshot"]["lang"], "vi");
        assert_eq!(value["snapshot"]["camera"], "ready");
        assert!(value["snapshot"]["result"].is_null());
    }
}
