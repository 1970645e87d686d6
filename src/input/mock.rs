use std::sync::{Arc, Mutex};

use anyhow::anyhow;

use super::InputSink;
use crate::gestures::ActionEvent;

#[derive(Default)]
struct MockInputState {
    events: Mutex<Vec<ActionEvent>>,
    fail_after: Mutex<Option<usize>>,
}

/// Records actions instead of injecting them.
#[derive(Clone, Default)]
pub struct MockInputSink {
    state: Arc<MockInputState>,
}

impl MockInputSink {
    pub fn new() -> (Self, MockInputHandle) {
        let state = Arc::new(MockInputState::default());
        (
            Self {
                state: Arc::clone(&state),
            },
            MockInputHandle { state },
        )
    }
}

impl InputSink for MockInputSink {
    fn execute(&mut self, event: &ActionEvent) -> anyhow::Result<()> {
        let mut events = self.state.events.lock().map_err(|_| anyhow!("lock"))?;
        let fail_after = *self.state.fail_after.lock().map_err(|_| anyhow!("lock"))?;
        if fail_after.is_some_and(|limit| events.len() >= limit) {
            return Err(anyhow!("mock sink rejected {}", event.kind()));
        }
        events.push(*event);
        Ok(())
    }
}

pub struct MockInputHandle {
    state: Arc<MockInputState>,
}

impl MockInputHandle {
    pub fn events(&self) -> Vec<ActionEvent> {
        match self.state.events.lock() {
            Ok(guard) => guard.clone(),
            Err(_) => Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.events().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reject every event once `count` have been recorded.
    pub fn fail_after(&self, count: usize) {
        if let Ok(mut guard) = self.state.fail_after.lock() {
            *guard = Some(count);
        }
    }
}
