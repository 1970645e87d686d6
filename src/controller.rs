use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use crate::gestures::{ActionEvent, GestureEngine, Mode, MouseButton, SessionStats, GESTURE_HELP};
use crate::input::InputSink;
use crate::source::LandmarkSource;

/// Drives frames from a landmark source through the engine into an input
/// sink until the stream ends, a stop is requested, or something fails.
pub struct ControlLoop<S, K> {
    engine: GestureEngine,
    source: S,
    sink: K,
    stop: Arc<AtomicBool>,
    /// Left button state as last delivered to the sink.
    left_held: bool,
}

impl<S: LandmarkSource, K: InputSink> ControlLoop<S, K> {
    pub fn new(engine: GestureEngine, source: S, sink: K) -> Self {
        Self {
            engine,
            source,
            sink,
            stop: Arc::new(AtomicBool::new(false)),
            left_held: false,
        }
    }

    /// Setting the flag ends the loop before the next frame is read.
    pub fn stop_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stop)
    }

    pub fn engine(&self) -> &GestureEngine {
        &self.engine
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }

    pub fn run(&mut self) -> anyhow::Result<SessionStats> {
        for line in GESTURE_HELP {
            tracing::info!("{line}");
        }

        let result = self.drive();

        let release = self
            .engine
            .shutdown()
            .or(self.left_held.then_some(ActionEvent::ButtonUp(MouseButton::Left)));
        if let Some(release) = release {
            if let Err(err) = self.execute(&release) {
                tracing::error!(?err, "failed to release left button on exit");
            }
        }

        let stats = self.engine.stats().clone();
        tracing::info!(
            frames = stats.frames,
            frames_with_hand = stats.frames_with_hand,
            invalid_frames = stats.invalid_frames,
            events = stats.total_events(),
            clicks = stats.right_clicks + stats.double_clicks + stats.button_downs,
            "session finished"
        );

        result.map(|_| stats)
    }

    fn execute(&mut self, event: &ActionEvent) -> anyhow::Result<()> {
        self.sink.execute(event)?;
        match event {
            ActionEvent::ButtonDown(MouseButton::Left) => self.left_held = true,
            ActionEvent::ButtonUp(MouseButton::Left) => self.left_held = false,
            _ => {}
        }
        Ok(())
    }

    fn drive(&mut self) -> anyhow::Result<()> {
        let start = Instant::now();
        let mut last_mode = Mode::Idle;

        while !self.stop.load(Ordering::SeqCst) {
            let Some(sample) = self.source.next_frame()? else {
                tracing::debug!("landmark stream closed");
                break;
            };
            let now = start + sample.offset;
            let events = self.engine.process_frame(sample.hand.as_ref(), now);
            let mut pending = events.iter();
            while let Some(event) = pending.next() {
                if let Err(err) = self.execute(event) {
                    // The engine already considers these released.
                    for release in pending.by_ref().filter(|e| matches!(e, ActionEvent::ButtonUp(_))) {
                        if let Err(err) = self.execute(release) {
                            tracing::error!(?err, "failed to release button after sink error");
                        }
                    }
                    return Err(err);
                }
            }

            let mode = self.engine.mode();
            if mode != last_mode {
                tracing::info!(status = self.engine.status_label(), "mode");
                last_mode = mode;
            }
        }
        Ok(())
    }
}
