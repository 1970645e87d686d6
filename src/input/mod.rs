mod cursor;
mod fail_safe;
mod mock;
mod rdev_sink;
mod screen;

pub use cursor::{default_cursor_provider, CursorPositionProvider, FixedCursorPosition, SystemCursorPosition};
pub use fail_safe::FailSafeSink;
pub use mock::{MockInputHandle, MockInputSink};
pub use rdev_sink::RdevInputSink;
pub use screen::{FixedScreenGeometry, RdevScreenGeometry, ScreenGeometry};

use crate::gestures::ActionEvent;

/// Receives the pointer actions produced by the gesture engine.
pub trait InputSink: Send {
    fn execute(&mut self, event: &ActionEvent) -> anyhow::Result<()>;
}

impl<S: InputSink + ?Sized> InputSink for Box<S> {
    fn execute(&mut self, event: &ActionEvent) -> anyhow::Result<()> {
        (**self).execute(event)
    }
}

/// Logs every action and injects nothing.
#[derive(Debug, Default)]
pub struct DryRunSink {
    executed: usize,
}

impl DryRunSink {
    pub fn executed(&self) -> usize {
        self.executed
    }
}

impl InputSink for DryRunSink {
    fn execute(&mut self, event: &ActionEvent) -> anyhow::Result<()> {
        self.executed += 1;
        match event {
            ActionEvent::PointerMove(point) => {
                tracing::debug!(kind = event.kind(), x = point.x, y = point.y, "dry run")
            }
            ActionEvent::Scroll(amount) => tracing::info!(kind = event.kind(), amount, "dry run"),
            _ => tracing::info!(kind = event.kind(), "dry run"),
        }
        Ok(())
    }
}
