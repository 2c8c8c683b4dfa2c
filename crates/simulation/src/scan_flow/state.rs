//! Scan lifecycle state machine.
//!
//! `idle -> analyzing -> result -> verifying -> syncing -> done`, with reset
//! back to idle from anywhere. User actions are methods returning
//! `Result<(), ScanError>`; the two progress animations are driven by
//! [`ScanSession::advance_analysis`] and [`ScanSession::advance_sync`].

use std::fmt;
use std::time::Duration;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::camera::CameraFrame;
use super::receipt::{draw_earned_points, generate_tx_hash, short_hash};
use crate::catalog::{alternative_brands, MaterialType};
use crate::config::{LEARN_THANK_YOU, PROGRESS_COMPLETE};
use crate::detection::{detect, Detection, DetectionResult, EprLogEntry};
use crate::epr_log::EprLog;
use crate::points::{RewardsLedger, ScanRecord};
use crate::sim_rng::RandomSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanPhase {
    #[default]
    Idle,
    Analyzing,
    Result,
    Verifying,
    Syncing,
    Done,
}

impl ScanPhase {
    pub fn name(self) -> &'static str {
        match self {
            ScanPhase::Idle => "idle",
            ScanPhase::Analyzing => "analyzing",
            ScanPhase::Result => "result",
            ScanPhase::Verifying => "verifying",
            ScanPhase::Syncing => "syncing",
            ScanPhase::Done => "done",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ScanError {
    /// The action is not accepted in the current phase.
    WrongPhase {
        action: &'static str,
        phase: ScanPhase,
    },
    /// A correction was requested but there is no detection result.
    NoResult,
    /// The learn prompt does not currently offer this answer.
    NotOffered { action: &'static str },
    /// The named brand is not one of the offered alternatives.
    UnknownBrand(String),
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::WrongPhase { action, phase } => {
                write!(f, "cannot {} while {}", action, phase.name())
            }
            ScanError::NoResult => write!(f, "no detection result to correct"),
            ScanError::NotOffered { action } => {
                write!(f, "{} is not offered for this result", action)
            }
            ScanError::UnknownBrand(brand) => {
                write!(f, "\"{}\" is not an offered brand", brand)
            }
        }
    }
}

impl std::error::Error for ScanError {}

/// How the user answered the learn prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum LearnAnswer {
    Material(MaterialType),
    Brand(&'static str),
    OtherBrand,
}

/// What the learn prompt asks for, if anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LearnPrompt {
    /// Low-confidence guess: confirm it, pick an alternative, or say "other".
    ConfirmBrand {
        suggested: &'static str,
        alternatives: Vec<&'static str>,
    },
    /// No brand guess at all: ask which material it is.
    ChooseMaterial,
}

/// Everything belonging to the scan in progress.
#[derive(Resource, Debug, Clone, Default, Serialize)]
pub struct ScanSession {
    pub phase: ScanPhase,
    pub analysis_progress: u8,
    pub sync_progress: u8,
    pub result: Option<DetectionResult>,
    pub epr: Option<EprLogEntry>,
    /// Full 64-digit hash.
    pub tx_hash: Option<String>,
    /// Fixed when analysis completes; credited unchanged on sync.
    pub earned_points: u32,
    pub captured_frame: Option<CameraFrame>,
    pub disposal_frame: Option<CameraFrame>,
    pub learn_answer: Option<LearnAnswer>,
    #[serde(skip)]
    thank_you_remaining: Option<Duration>,
}

impl ScanSession {
    fn require(&self, expected: ScanPhase, action: &'static str) -> Result<(), ScanError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(ScanError::WrongPhase {
                action,
                phase: self.phase,
            })
        }
    }

    // -------------------------------------------------------------------------
    // User actions
    // -------------------------------------------------------------------------

    /// Take the item photo (if the camera gave one) and start analysis.
    pub fn capture(&mut self, frame: Option<CameraFrame>) -> Result<(), ScanError> {
        self.require(ScanPhase::Idle, "capture")?;
        self.captured_frame = frame;
        self.analysis_progress = 0;
        self.learn_answer = None;
        self.thank_you_remaining = None;
        self.phase = ScanPhase::Analyzing;
        Ok(())
    }

    pub fn start_verification(&mut self) -> Result<(), ScanError> {
        self.require(ScanPhase::Result, "verify")?;
        self.disposal_frame = None;
        self.phase = ScanPhase::Verifying;
        Ok(())
    }

    pub fn capture_disposal_proof(&mut self, frame: Option<CameraFrame>) -> Result<(), ScanError> {
        self.require(ScanPhase::Verifying, "capture disposal proof")?;
        self.disposal_frame = frame;
        self.sync_progress = 0;
        self.phase = ScanPhase::Syncing;
        Ok(())
    }

    /// Back to idle, dropping every per-scan field.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    // -------------------------------------------------------------------------
    // Progress
    // -------------------------------------------------------------------------

    /// One analysis tick. Runs the detection on the tick that reaches 100 and
    /// returns `true` on that tick only.
    pub fn advance_analysis<R: RandomSource + ?Sized>(
        &mut self,
        step: u8,
        rng: &mut R,
        epr_log: &mut EprLog,
        now_ms: u64,
    ) -> bool {
        if self.phase != ScanPhase::Analyzing {
            return false;
        }
        self.analysis_progress = self
            .analysis_progress
            .saturating_add(step)
            .min(PROGRESS_COMPLETE);
        if self.analysis_progress < PROGRESS_COMPLETE {
            return false;
        }

        let Detection { result, epr } = detect(rng, now_ms);
        epr_log.push(epr.clone());
        self.result = Some(result);
        self.epr = Some(epr);
        self.tx_hash = Some(generate_tx_hash(rng));
        self.earned_points = draw_earned_points(rng);
        self.phase = ScanPhase::Result;
        true
    }

    /// One sync tick. Credits the ledger on the tick that reaches 100 and
    /// returns `true` on that tick only.
    pub fn advance_sync<L: RewardsLedger + ?Sized>(
        &mut self,
        step: u8,
        ledger: &mut L,
        now_ms: u64,
    ) -> bool {
        if self.phase != ScanPhase::Syncing {
            return false;
        }
        self.sync_progress = self
            .sync_progress
            .saturating_add(step)
            .min(PROGRESS_COMPLETE);
        if self.sync_progress < PROGRESS_COMPLETE {
            return false;
        }

        ledger.add_points(self.earned_points);
        ledger.add_scan();
        if let Some(record) = self.history_record() {
            ledger.add_scan_entry(record, now_ms);
        }
        self.phase = ScanPhase::Done;
        true
    }

    /// The history entry this scan will produce, from the current (possibly
    /// corrected) result.
    pub fn history_record(&self) -> Option<ScanRecord> {
        let result = self.result.as_ref()?;
        Some(ScanRecord {
            item: result.name,
            brand: result.brand,
            category: result.material.label(),
            material: result.material,
            points: self.earned_points,
            tx_hash: self.display_hash().unwrap_or_default(),
        })
    }

    pub fn display_hash(&self) -> Option<String> {
        self.tx_hash.as_deref().map(short_hash)
    }

    // -------------------------------------------------------------------------
    // Learn prompt
    // -------------------------------------------------------------------------

    pub fn learn_prompt(&self) -> Option<LearnPrompt> {
        if self.phase != ScanPhase::Result || self.learn_answer.is_some() {
            return None;
        }
        let result = self.result.as_ref()?;
        if result.is_known_brand {
            return None;
        }
        match result.low_confidence_brand {
            Some(suggested) => Some(LearnPrompt::ConfirmBrand {
                suggested,
                alternatives: alternative_brands(result.shape, suggested)
                    .into_iter()
                    .map(|b| b.brand)
                    .collect(),
            }),
            None => Some(LearnPrompt::ChooseMaterial),
        }
    }

    fn answerable(&self, action: &'static str) -> Result<(&DetectionResult, LearnPrompt), ScanError> {
        self.require(ScanPhase::Result, action)?;
        let result = self.result.as_ref().ok_or(ScanError::NoResult)?;
        let prompt = self
            .learn_prompt()
            .ok_or(ScanError::NotOffered { action })?;
        Ok((result, prompt))
    }

    fn record_answer(&mut self, result: DetectionResult, answer: LearnAnswer) {
        self.result = Some(result);
        self.learn_answer = Some(answer);
        self.thank_you_remaining = Some(LEARN_THANK_YOU);
    }

    pub fn confirm_material(&mut self, material: MaterialType) -> Result<(), ScanError> {
        let action = "confirm material";
        let (result, prompt) = self.answerable(action)?;
        if prompt != LearnPrompt::ChooseMaterial {
            return Err(ScanError::NotOffered { action });
        }
        let corrected = result.with_material(material);
        self.record_answer(corrected, LearnAnswer::Material(material));
        Ok(())
    }

    pub fn confirm_suggested_brand(&mut self) -> Result<(), ScanError> {
        let action = "confirm brand";
        let (result, _) = self.answerable(action)?;
        let corrected = result
            .with_confirmed_brand()
            .ok_or(ScanError::NotOffered { action })?;
        let brand = corrected.brand.unwrap_or_default();
        self.record_answer(corrected, LearnAnswer::Brand(brand));
        Ok(())
    }

    /// Pick one of the offered same-shape alternatives by name.
    pub fn choose_alternative_brand(&mut self, brand: &str) -> Result<(), ScanError> {
        let action = "choose brand";
        let (result, prompt) = self.answerable(action)?;
        let LearnPrompt::ConfirmBrand { suggested, .. } = prompt else {
            return Err(ScanError::NotOffered { action });
        };
        let entry = alternative_brands(result.shape, suggested)
            .into_iter()
            .find(|b| b.brand == brand)
            .ok_or_else(|| ScanError::UnknownBrand(brand.to_string()))?;
        let corrected = result.with_alternative_brand(entry);
        self.record_answer(corrected, LearnAnswer::Brand(entry.brand));
        Ok(())
    }

    /// "Some other brand": recorded, result unchanged.
    pub fn answer_other_brand(&mut self) -> Result<(), ScanError> {
        let action = "answer other brand";
        let (result, prompt) = self.answerable(action)?;
        if !matches!(prompt, LearnPrompt::ConfirmBrand { .. }) {
            return Err(ScanError::NotOffered { action });
        }
        let unchanged = result.clone();
        self.record_answer(unchanged, LearnAnswer::OtherBrand);
        Ok(())
    }

    /// Count down the "thank you" note.
    pub fn tick_learn(&mut self, delta: Duration) {
        if let Some(remaining) = self.thank_you_remaining {
            self.thank_you_remaining = remaining.checked_sub(delta).filter(|d| !d.is_zero());
        }
    }

    pub fn thank_you_visible(&self) -> bool {
        self.thank_you_remaining.is_some()
    }
}
