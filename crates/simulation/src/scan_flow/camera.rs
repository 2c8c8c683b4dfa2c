//! Simulated camera feed.
//!
//! There is no capture device. The feed only models readiness so the flow can
//! show the same fallback a real device failure would produce: the scan
//! continues without a frame and the UI shows the simulation-mode banner.

use bevy::prelude::*;
use serde::Serialize;

use crate::config::CAMERA_FRAME_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CameraStatus {
    #[default]
    Initializing,
    Ready,
    /// Permission denied or no device. Recoverable: scans run without frames.
    Unavailable,
}

/// A captured still.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CameraFrame {
    pub width: u32,
    pub height: u32,
    /// Unix milliseconds.
    pub captured_at: u64,
    /// Capture counter, unique within the session.
    pub sequence: u32,
}

#[derive(Resource, Debug, Clone, Default)]
pub struct CameraFeed {
    pub status: CameraStatus,
    frames_captured: u32,
}

impl CameraFeed {
    /// A feed whose device could not be opened.
    pub fn unavailable() -> Self {
        Self {
            status: CameraStatus::Unavailable,
            frames_captured: 0,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == CameraStatus::Ready
    }

    /// The camera failed and the flow is running without frames.
    pub fn simulation_mode(&self) -> bool {
        self.status == CameraStatus::Unavailable
    }

    /// Grab the current frame. `None` unless the device is ready.
    pub fn capture(&mut self, now_ms: u64) -> Option<CameraFrame> {
        if !self.is_ready() {
            return None;
        }
        let frame = CameraFrame {
            width: CAMERA_FRAME_SIZE,
            height: CAMERA_FRAME_SIZE,
            captured_at: now_ms,
            sequence: self.frames_captured,
        };
        self.frames_captured += 1;
        Some(frame)
    }

    pub fn frames_captured(&self) -> u32 {
        self.frames_captured
    }
}

/// Finish device start-up. A feed already marked unavailable stays that way.
pub fn initialize_camera(mut feed: ResMut<CameraFeed>) {
    match feed.status {
        CameraStatus::Initializing => {
            feed.status = CameraStatus::Ready;
            info!("camera ready ({}x{})", CAMERA_FRAME_SIZE, CAMERA_FRAME_SIZE);
        }
        CameraStatus::Unavailable => {
            warn!("camera unavailable, running scans in simulation mode");
        }
        CameraStatus::Ready => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_requires_ready() {
        let mut feed = CameraFeed::default();
        assert_eq!(feed.status, CameraStatus::Initializing);
        assert!(feed.capture(1).is_none());

        feed.status = CameraStatus::Ready;
        let frame = feed.capture(2).unwrap();
        assert_eq!(frame.width, 640);
        assert_eq!(frame.captured_at, 2);
        assert_eq!(feed.capture(3).unwrap().sequence, 1);
        assert_eq!(feed.frames_captured(), 2);
    }

    #[test]
    fn test_unavailable_feed_never_captures() {
        let mut feed = CameraFeed::unavailable();
        assert!(feed.simulation_mode());
        assert!(feed.capture(1).is_none());
        assert_eq!(feed.frames_captured(), 0);
    }
}
