use std::thread;
use std::time::Duration;

use anyhow::anyhow;
use rdev::{simulate, Button, EventType};

use super::InputSink;
use crate::gestures::{ActionEvent, MouseButton};

/// Injects actions into the OS through `rdev::simulate`.
#[derive(Debug, Clone)]
pub struct RdevInputSink {
    /// Pause after each simulated event so the OS queue keeps up.
    event_delay: Duration,
}

impl Default for RdevInputSink {
    fn default() -> Self {
        Self {
            event_delay: Duration::from_millis(1),
        }
    }
}

impl RdevInputSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_event_delay(event_delay: Duration) -> Self {
        Self { event_delay }
    }

    fn send(&self, event: EventType) -> anyhow::Result<()> {
        simulate(&event).map_err(|err| anyhow!("failed to simulate {event:?}: {err:?}"))?;
        if !self.event_delay.is_zero() {
            thread::sleep(self.event_delay);
        }
        Ok(())
    }

    fn click(&self, button: Button) -> anyhow::Result<()> {
        self.send(EventType::ButtonPress(button))?;
        self.send(EventType::ButtonRelease(button))
    }
}

fn rdev_button(button: MouseButton) -> Button {
    match button {
        MouseButton::Left => Button::Left,
        MouseButton::Right => Button::Right,
    }
}

impl InputSink for RdevInputSink {
    fn execute(&mut self, event: &ActionEvent) -> anyhow::Result<()> {
        match *event {
            ActionEvent::PointerMove(point) => self.send(EventType::MouseMove {
                x: point.x as f64,
                y: point.y as f64,
            }),
            ActionEvent::ButtonDown(button) => self.send(EventType::ButtonPress(rdev_button(button))),
            ActionEvent::ButtonUp(button) => self.send(EventType::ButtonRelease(rdev_button(button))),
            ActionEvent::Scroll(amount) => self.send(EventType::Wheel {
                delta_x: 0,
                delta_y: amount as i64,
            }),
            ActionEvent::RightClick => self.click(Button::Right),
            ActionEvent::DoubleClick => {
                self.click(Button::Left)?;
                self.click(Button::Left)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_buttons() {
        assert!(matches!(rdev_button(MouseButton::Left), Button::Left));
        assert!(matches!(rdev_button(MouseButton::Right), Button::Right));
    }
}
