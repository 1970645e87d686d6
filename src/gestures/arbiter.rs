use std::time::{Duration, Instant};

use crate::gestures::classifier::Mode;
use crate::landmarks::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
}

impl MouseButton {
    pub fn as_str(&self) -> &'static str {
        match self {
            MouseButton::Left => "left",
            MouseButton::Right => "right",
        }
    }
}

/// Actions handed to the OS input sink, in emission order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActionEvent {
    PointerMove(Point),
    ButtonDown(MouseButton),
    ButtonUp(MouseButton),
    /// Wheel clicks, positive scrolls up.
    Scroll(i32),
    RightClick,
    DoubleClick,
}

impl ActionEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            ActionEvent::PointerMove(_) => "pointer-move",
            ActionEvent::ButtonDown(_) => "button-down",
            ActionEvent::ButtonUp(_) => "button-up",
            ActionEvent::Scroll(_) => "scroll",
            ActionEvent::RightClick => "right-click",
            ActionEvent::DoubleClick => "double-click",
        }
    }
}

/// Cross-frame state of the arbiter.
///
/// `left_button_down` is true only while a press is outstanding; any frame
/// that is not a left pinch, including hand loss, clears it with a release.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArbiterState {
    pub left_button_down: bool,
    pub scroll_anchor_y: Option<f32>,
    pub last_right_click: Option<Instant>,
    pub last_double_click: Option<Instant>,
    /// Set by the first move frame; drag motion is only emitted afterwards.
    pub pointer_engaged: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArbiterConfig {
    pub scroll_sensitivity: f32,
    pub scroll_gain: f32,
    pub right_click_cooldown: Duration,
    pub double_click_cooldown: Duration,
}

/// What the arbiter sees of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameInput {
    pub mode: Mode,
    /// Raw index fingertip pixel, `None` when no hand was detected.
    pub index_tip: Option<Point>,
    /// Smoothed pointer, present when the motion filter ran this frame.
    pub pointer: Option<Point>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActionArbiter {
    config: ArbiterConfig,
}

impl ActionArbiter {
    pub fn new(config: ArbiterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ArbiterConfig {
        &self.config
    }

    pub fn step(&self, state: &mut ArbiterState, input: FrameInput, now: Instant) -> Vec<ActionEvent> {
        let mut events = Vec::new();

        match input.mode {
            Mode::Move => {
                if let Some(pointer) = input.pointer {
                    state.pointer_engaged = true;
                    events.push(ActionEvent::PointerMove(pointer));
                }
            }
            Mode::LeftPinch if state.left_button_down && state.pointer_engaged => {
                if let Some(pointer) = input.pointer {
                    events.push(ActionEvent::PointerMove(pointer));
                }
            }
            Mode::Scroll => {
                if let Some(tip) = input.index_tip {
                    if let Some(amount) = self.scroll_amount(state.scroll_anchor_y, tip.y) {
                        events.push(ActionEvent::Scroll(amount));
                    }
                    state.scroll_anchor_y = Some(tip.y);
                }
            }
            _ => {}
        }

        if input.mode != Mode::Scroll {
            state.scroll_anchor_y = None;
        }

        if input.mode == Mode::LeftPinch {
            if !state.left_button_down {
                state.left_button_down = true;
                events.push(ActionEvent::ButtonDown(MouseButton::Left));
            }
        } else if let Some(release) = self.release(state) {
            events.push(release);
        }

        match input.mode {
            Mode::RightPinch => {
                if cooldown_elapsed(state.last_right_click, self.config.right_click_cooldown, now) {
                    state.last_right_click = Some(now);
                    events.push(ActionEvent::RightClick);
                }
            }
            Mode::DoublePinch => {
                if cooldown_elapsed(state.last_double_click, self.config.double_click_cooldown, now) {
                    state.last_double_click = Some(now);
                    events.push(ActionEvent::DoubleClick);
                }
            }
            _ => {}
        }

        events
    }

    /// Release a held left button, if any.
    pub fn release(&self, state: &mut ArbiterState) -> Option<ActionEvent> {
        if state.left_button_down {
            state.left_button_down = false;
            Some(ActionEvent::ButtonUp(MouseButton::Left))
        } else {
            None
        }
    }

    fn scroll_amount(&self, anchor: Option<f32>, tip_y: f32) -> Option<i32> {
        let delta = tip_y - anchor?;
        if delta.abs() <= self.config.scroll_sensitivity {
            return None;
        }
        let amount = (-delta * self.config.scroll_gain) as i32;
        (amount != 0).then_some(amount)
    }
}

fn cooldown_elapsed(last: Option<Instant>, cooldown: Duration, now: Instant) -> bool {
    match last {
        Some(last) => now.saturating_duration_since(last) >= cooldown,
        None => true,
    }
}
