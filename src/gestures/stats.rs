use crate::gestures::arbiter::ActionEvent;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub frames: u64,
    pub frames_with_hand: u64,
    pub invalid_frames: u64,
    pub pointer_moves: u64,
    pub scrolls: u64,
    pub button_downs: u64,
    pub button_ups: u64,
    pub right_clicks: u64,
    pub double_clicks: u64,
}

impl SessionStats {
    pub fn record_frame(&mut self, had_hand: bool) {
        self.frames += 1;
        if had_hand {
            self.frames_with_hand += 1;
        }
    }

    pub fn record_invalid_frame(&mut self) {
        self.invalid_frames += 1;
    }

    pub fn record_event(&mut self, event: &ActionEvent) {
        match event {
            ActionEvent::PointerMove(_) => self.pointer_moves += 1,
            ActionEvent::Scroll(_) => self.scrolls += 1,
            ActionEvent::ButtonDown(_) => self.button_downs += 1,
            ActionEvent::ButtonUp(_) => self.button_ups += 1,
            ActionEvent::RightClick => self.right_clicks += 1,
            ActionEvent::DoubleClick => self.double_clicks += 1,
        }
    }

    pub fn total_events(&self) -> u64 {
        self.pointer_moves
            + self.scrolls
            + self.button_downs
            + self.button_ups
            + self.right_clicks
            + self.double_clicks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gestures::arbiter::MouseButton;

    #[test]
    fn counts_events_by_kind() {
        let mut stats = SessionStats::default();
        stats.record_frame(true);
        stats.record_frame(false);
        stats.record_event(&ActionEvent::ButtonDown(MouseButton::Left));
        stats.record_event(&ActionEvent::ButtonUp(MouseButton::Left));
        stats.record_event(&ActionEvent::Scroll(4));

        assert_eq!(stats.frames, 2);
        assert_eq!(stats.frames_with_hand, 1);
        assert_eq!(stats.button_downs, 1);
        assert_eq!(stats.button_ups, 1);
        assert_eq!(stats.scrolls, 1);
        assert_eq!(stats.total_events(), 3);
    }
}
