use std::sync::Arc;

use super::{CursorPositionProvider, InputSink};
use crate::error::AirMouseError;
use crate::gestures::ActionEvent;
use crate::landmarks::Point;

/// Refuses to act while the pointer sits in a screen corner, so slamming
/// the cursor into a corner stops a runaway session. Button releases always
/// go through.
pub struct FailSafeSink<S> {
    inner: S,
    cursor: Arc<dyn CursorPositionProvider>,
    screen: (f32, f32),
    margin: f32,
    last_commanded: Option<Point>,
}

impl<S: InputSink> FailSafeSink<S> {
    pub fn new(inner: S, cursor: Arc<dyn CursorPositionProvider>, screen: (f32, f32), margin: f32) -> Self {
        Self {
            inner,
            cursor,
            screen,
            margin: margin.max(0.0),
            last_commanded: None,
        }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }

    fn current_position(&self) -> Option<(f32, f32)> {
        self.cursor
            .cursor_position()
            .or_else(|| self.last_commanded.map(|p| (p.x, p.y)))
    }

    fn in_corner(&self, (x, y): (f32, f32)) -> bool {
        let (width, height) = self.screen;
        let near_left = x <= self.margin;
        let near_top = y <= self.margin;
        let near_right = x >= width - 1.0 - self.margin;
        let near_bottom = y >= height - 1.0 - self.margin;
        (near_left || near_right) && (near_top || near_bottom)
    }
}

impl<S: InputSink> InputSink for FailSafeSink<S> {
    fn execute(&mut self, event: &ActionEvent) -> anyhow::Result<()> {
        if matches!(event, ActionEvent::ButtonUp(_)) {
            return self.inner.execute(event);
        }
        if let Some(position) = self.current_position() {
            if self.in_corner(position) {
                let (x, y) = position;
                tracing::warn!(x, y, kind = event.kind(), "fail-safe triggered");
                return Err(AirMouseError::FailSafeTriggered { x, y }.into());
            }
        }
        self.inner.execute(event)?;
        if let ActionEvent::PointerMove(point) = event {
            self.last_commanded = Some(*point);
        }
        Ok(())
    }
}
