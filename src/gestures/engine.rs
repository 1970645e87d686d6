use std::time::{Duration, Instant};

use crate::error::{AirMouseError, Result};
use crate::gestures::arbiter::{
    ActionArbiter, ActionEvent, ArbiterConfig, ArbiterState, FrameInput,
};
use crate::gestures::classifier::{FingerTips, GestureClassifier, Mode};
use crate::gestures::fingers::{classify_fingers, FingerStates};
use crate::gestures::motion::{Bounds, MotionFilter};
use crate::gestures::stats::SessionStats;
use crate::landmarks::{LandmarkFrame, Point};

#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub camera_width: f32,
    pub camera_height: f32,
    /// Excluded on every side of the camera frame before remapping.
    pub frame_margin: f32,
    pub screen_width: f32,
    pub screen_height: f32,
    pub smoothing: f32,
    pub pinch_threshold: f32,
    pub scroll_sensitivity: f32,
    pub scroll_gain: f32,
    pub right_click_cooldown: Duration,
    pub double_click_cooldown: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            camera_width: 640.0,
            camera_height: 480.0,
            frame_margin: 100.0,
            screen_width: 1920.0,
            screen_height: 1080.0,
            smoothing: 5.0,
            pinch_threshold: 30.0,
            scroll_sensitivity: 10.0,
            scroll_gain: 2.0,
            right_click_cooldown: Duration::from_millis(200),
            double_click_cooldown: Duration::from_millis(300),
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| Err(AirMouseError::InvalidConfig(msg));

        if !(self.smoothing.is_finite() && self.smoothing >= 1.0) {
            return invalid(format!("smoothing must be at least 1, got {}", self.smoothing));
        }
        if !(self.camera_width > 0.0 && self.camera_height > 0.0) {
            return invalid(format!(
                "camera size must be positive, got {}x{}",
                self.camera_width, self.camera_height
            ));
        }
        if !(self.screen_width > 0.0 && self.screen_height > 0.0) {
            return invalid(format!(
                "screen size must be positive, got {}x{}",
                self.screen_width, self.screen_height
            ));
        }
        if !(self.frame_margin >= 0.0) {
            return invalid(format!("frame margin must not be negative, got {}", self.frame_margin));
        }
        let inset = self.camera_bounds();
        if !(inset.width() > 0.0 && inset.height() > 0.0) {
            return invalid(format!(
                "frame margin {} leaves no usable area in a {}x{} camera frame",
                self.frame_margin, self.camera_width, self.camera_height
            ));
        }
        if !(self.pinch_threshold > 0.0) {
            return invalid(format!("pinch threshold must be positive, got {}", self.pinch_threshold));
        }
        if !(self.scroll_sensitivity >= 0.0) {
            return invalid(format!(
                "scroll sensitivity must not be negative, got {}",
                self.scroll_sensitivity
            ));
        }
        if !(self.scroll_gain.is_finite() && self.scroll_gain != 0.0) {
            return invalid(format!("scroll gain must be finite and non-zero, got {}", self.scroll_gain));
        }
        Ok(())
    }

    /// Inset camera rectangle used as the remap domain.
    pub fn camera_bounds(&self) -> Bounds {
        Bounds::from_size(self.camera_width, self.camera_height).inset(self.frame_margin)
    }

    pub fn screen_bounds(&self) -> Bounds {
        Bounds::from_size(self.screen_width, self.screen_height)
    }

    fn arbiter_config(&self) -> ArbiterConfig {
        ArbiterConfig {
            scroll_sensitivity: self.scroll_sensitivity,
            scroll_gain: self.scroll_gain,
            right_click_cooldown: self.right_click_cooldown,
            double_click_cooldown: self.double_click_cooldown,
        }
    }
}

/// Turns landmark frames into pointer actions.
///
/// All cross-frame state lives here and is mutated once per
/// [`GestureEngine::process_frame`] call by a single owner. Call
/// [`GestureEngine::shutdown`] when the loop ends so a held button is
/// released.
pub struct GestureEngine {
    config: EngineConfig,
    classifier: GestureClassifier,
    filter: MotionFilter,
    arbiter: ActionArbiter,
    state: ArbiterState,
    mode: Mode,
    fingers: Option<FingerStates>,
    stats: SessionStats,
}

impl GestureEngine {
    pub fn new(config: EngineConfig) -> Result<Self> {
        Self::with_state(config, ArbiterState::default(), Point::default())
    }

    /// Resume from a known arbiter state and smoothed pointer position.
    pub fn with_state(config: EngineConfig, state: ArbiterState, pointer: Point) -> Result<Self> {
        config.validate()?;
        let filter = MotionFilter::with_previous(
            config.camera_bounds(),
            config.screen_bounds(),
            config.smoothing,
            pointer,
        );
        Ok(Self {
            classifier: GestureClassifier::new(config.pinch_threshold),
            arbiter: ActionArbiter::new(config.arbiter_config()),
            filter,
            state,
            mode: Mode::Idle,
            fingers: None,
            stats: SessionStats::default(),
            config,
        })
    }

    pub fn process_frame(&mut self, frame: Option<&LandmarkFrame>, now: Instant) -> Vec<ActionEvent> {
        let detected = frame.and_then(|frame| self.read_frame(frame));
        self.stats.record_frame(detected.is_some());

        let input = match detected {
            Some((fingers, tips)) => {
                let mode = self.classifier.classify(&fingers, &tips);
                let pointer = fingers.index.then(|| self.filter.update(tips.index));
                self.fingers = Some(fingers);
                FrameInput {
                    mode,
                    index_tip: Some(tips.index),
                    pointer,
                }
            }
            None => {
                self.fingers = None;
                FrameInput::default()
            }
        };

        if input.mode != self.mode {
            tracing::debug!(from = %self.mode, to = %input.mode, "gesture mode changed");
            self.mode = input.mode;
        }

        let events = self.arbiter.step(&mut self.state, input, now);
        for event in &events {
            tracing::trace!(?event, "action emitted");
            self.stats.record_event(event);
        }
        events
    }

    fn read_frame(&mut self, frame: &LandmarkFrame) -> Option<(FingerStates, FingerTips)> {
        if frame.is_empty() {
            return None;
        }
        let fingers = match classify_fingers(frame) {
            Ok(fingers) => fingers,
            Err(err) => {
                tracing::debug!(%err, "dropping malformed landmark frame");
                self.stats.record_invalid_frame();
                return None;
            }
        };
        Some((fingers, FingerTips::from_frame(frame)?))
    }

    /// Forced release for loop teardown, regardless of the current mode.
    pub fn shutdown(&mut self) -> Option<ActionEvent> {
        self.mode = Mode::Idle;
        self.state.scroll_anchor_y = None;
        let release = self.arbiter.release(&mut self.state);
        if let Some(event) = &release {
            tracing::debug!("releasing held left button on shutdown");
            self.stats.record_event(event);
        }
        release
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Human readable mode for overlays and logs.
    pub fn status_label(&self) -> &'static str {
        match self.mode {
            Mode::Idle => "IDLE",
            Mode::Move => "MOVE",
            Mode::Scroll => "SCROLL",
            Mode::LeftPinch => "LEFT DRAG",
            Mode::RightPinch => "RIGHT CLICK",
            Mode::DoublePinch => "DOUBLE CLICK",
        }
    }

    pub fn fingers(&self) -> Option<FingerStates> {
        self.fingers
    }

    pub fn state(&self) -> &ArbiterState {
        &self.state
    }

    pub fn pointer(&self) -> Point {
        self.filter.position()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }
}
