use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::gestures::EngineConfig;
use crate::source::ReplayOptions;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Settings {
    /// When enabled the application initialises the logger at debug level.
    #[serde(default)]
    pub debug_logging: bool,
    /// Optional file receiving a copy of the log output.
    #[serde(default)]
    pub log_file: Option<String>,
    #[serde(default = "default_camera_width")]
    pub camera_width: f32,
    #[serde(default = "default_camera_height")]
    pub camera_height: f32,
    /// Pixels ignored on every edge of the camera frame. Reaching the inner
    /// rectangle's border moves the pointer to the screen edge.
    #[serde(default = "default_frame_margin")]
    pub frame_margin: f32,
    /// Higher values give a steadier but laggier pointer. Must be at least 1.
    #[serde(default = "default_smoothing")]
    pub smoothing: f32,
    /// Thumb to fingertip distance, in camera pixels, that counts as a pinch.
    #[serde(default = "default_pinch_threshold")]
    pub pinch_threshold: f32,
    #[serde(default = "default_scroll_sensitivity")]
    pub scroll_sensitivity: f32,
    #[serde(default = "default_scroll_gain")]
    pub scroll_gain: f32,
    #[serde(default = "default_right_click_cooldown_ms")]
    pub right_click_cooldown_ms: u64,
    #[serde(default = "default_double_click_cooldown_ms")]
    pub double_click_cooldown_ms: u64,
    /// Overrides the detected display size.
    #[serde(default)]
    pub screen_size: Option<(f32, f32)>,
    /// Stop when the pointer is pushed into a screen corner.
    #[serde(default = "default_fail_safe")]
    pub fail_safe: bool,
    #[serde(default)]
    pub fail_safe_margin_px: f32,
    #[serde(default)]
    pub mirror_input: bool,
    /// Landmarks arrive as 0..1 fractions of the camera frame.
    #[serde(default)]
    pub normalized_input: bool,
}

fn default_camera_width() -> f32 {
    640.0
}

fn default_camera_height() -> f32 {
    480.0
}

fn default_frame_margin() -> f32 {
    100.0
}

fn default_smoothing() -> f32 {
    5.0
}

fn default_pinch_threshold() -> f32 {
    30.0
}

fn default_scroll_sensitivity() -> f32 {
    10.0
}

fn default_scroll_gain() -> f32 {
    2.0
}

fn default_right_click_cooldown_ms() -> u64 {
    200
}

fn default_double_click_cooldown_ms() -> u64 {
    300
}

fn default_fail_safe() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug_logging: false,
            log_file: None,
            camera_width: default_camera_width(),
            camera_height: default_camera_height(),
            frame_margin: default_frame_margin(),
            smoothing: default_smoothing(),
            pinch_threshold: default_pinch_threshold(),
            scroll_sensitivity: default_scroll_sensitivity(),
            scroll_gain: default_scroll_gain(),
            right_click_cooldown_ms: default_right_click_cooldown_ms(),
            double_click_cooldown_ms: default_double_click_cooldown_ms(),
            screen_size: None,
            fail_safe: default_fail_safe(),
            fail_safe_margin_px: 0.0,
            mirror_input: false,
            normalized_input: false,
        }
    }
}

impl Settings {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &str) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Engine parameters for a display of the given size. Not validated
    /// here; `GestureEngine::new` rejects bad values.
    pub fn engine_config(&self, screen_width: f32, screen_height: f32) -> EngineConfig {
        EngineConfig {
            camera_width: self.camera_width,
            camera_height: self.camera_height,
            frame_margin: self.frame_margin,
            screen_width,
            screen_height,
            smoothing: self.smoothing,
            pinch_threshold: self.pinch_threshold,
            scroll_sensitivity: self.scroll_sensitivity,
            scroll_gain: self.scroll_gain,
            right_click_cooldown: Duration::from_millis(self.right_click_cooldown_ms),
            double_click_cooldown: Duration::from_millis(self.double_click_cooldown_ms),
        }
    }

    pub fn replay_options(&self) -> ReplayOptions {
        ReplayOptions {
            camera_width: self.camera_width,
            camera_height: self.camera_height,
            mirror: self.mirror_input,
            normalized: self.normalized_input,
        }
    }
}
