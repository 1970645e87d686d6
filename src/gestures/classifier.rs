use crate::gestures::fingers::FingerStates;
use crate::landmarks::{Finger, LandmarkFrame, Point};

/// Exactly one mode is active per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    #[default]
    Idle,
    Move,
    Scroll,
    LeftPinch,
    RightPinch,
    DoublePinch,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Idle => "idle",
            Mode::Move => "move",
            Mode::Scroll => "scroll",
            Mode::LeftPinch => "left-pinch",
            Mode::RightPinch => "right-pinch",
            Mode::DoublePinch => "double-pinch",
        }
    }

    pub fn is_pinch(&self) -> bool {
        matches!(self, Mode::LeftPinch | Mode::RightPinch | Mode::DoublePinch)
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fingertip pixels used for pinch distances and pointer tracking.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FingerTips {
    pub thumb: Point,
    pub index: Point,
    pub middle: Point,
    pub ring: Point,
}

impl FingerTips {
    /// Tips of a frame already validated by the finger classifier.
    pub fn from_frame(frame: &LandmarkFrame) -> Option<Self> {
        Some(Self {
            thumb: frame.get(Finger::Thumb.tip())?,
            index: frame.get(Finger::Index.tip())?,
            middle: frame.get(Finger::Middle.tip())?,
            ring: frame.get(Finger::Ring.tip())?,
        })
    }

    /// Distance from the thumb tip to the given digit's tip.
    pub fn pinch_distance(&self, finger: Finger) -> f32 {
        let tip = match finger {
            Finger::Index => self.index,
            Finger::Middle => self.middle,
            Finger::Ring => self.ring,
            Finger::Thumb | Finger::Pinky => return f32::INFINITY,
        };
        self.thumb.distance(tip)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureClassifier {
    pinch_threshold: f32,
}

impl GestureClassifier {
    pub fn new(pinch_threshold: f32) -> Self {
        Self { pinch_threshold }
    }

    pub fn pinch_threshold(&self) -> f32 {
        self.pinch_threshold
    }

    fn pinched(&self, tips: &FingerTips, finger: Finger) -> bool {
        tips.pinch_distance(finger) < self.pinch_threshold
    }

    /// Ordered predicate chain, first match wins. Pinches come before
    /// pointer modes so an intentional pinch is never read as a scroll.
    /// Between pinches the order index, middle, ring decides ties.
    pub fn classify(&self, fingers: &FingerStates, tips: &FingerTips) -> Mode {
        if self.pinched(tips, Finger::Index) {
            Mode::LeftPinch
        } else if self.pinched(tips, Finger::Middle) {
            Mode::RightPinch
        } else if self.pinched(tips, Finger::Ring) {
            Mode::DoublePinch
        } else if fingers.index && fingers.middle {
            Mode::Scroll
        } else if fingers.index {
            Mode::Move
        } else {
            Mode::Idle
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apart() -> FingerTips {
        FingerTips {
            thumb: Point::new(0.0, 0.0),
            index: Point::new(100.0, 0.0),
            middle: Point::new(0.0, 100.0),
            ring: Point::new(100.0, 100.0),
        }
    }

    #[test]
    fn threshold_is_strict() {
        let classifier = GestureClassifier::new(30.0);
        let mut tips = apart();
        tips.index = Point::new(30.0, 0.0);
        assert_eq!(
            classifier.classify(&FingerStates::default(), &tips),
            Mode::Idle
        );
        tips.index = Point::new(29.9, 0.0);
        assert_eq!(
            classifier.classify(&FingerStates::default(), &tips),
            Mode::LeftPinch
        );
    }

    #[test]
    fn index_pinch_beats_middle_and_ring() {
        let classifier = GestureClassifier::new(30.0);
        let tips = FingerTips {
            thumb: Point::new(0.0, 0.0),
            index: Point::new(5.0, 0.0),
            middle: Point::new(0.0, 5.0),
            ring: Point::new(5.0, 5.0),
        };
        assert_eq!(
            classifier.classify(&FingerStates::default(), &tips),
            Mode::LeftPinch
        );
    }

    #[test]
    fn middle_pinch_beats_ring() {
        let classifier = GestureClassifier::new(30.0);
        let mut tips = apart();
        tips.middle = Point::new(0.0, 10.0);
        tips.ring = Point::new(10.0, 0.0);
        assert_eq!(
            classifier.classify(&FingerStates::default(), &tips),
            Mode::RightPinch
        );
    }

    #[test]
    fn pointer_modes_without_pinch() {
        let classifier = GestureClassifier::new(30.0);
        let tips = apart();
        let scroll = FingerStates::from([false, true, true, false, false]);
        let point = FingerStates::from([true, true, false, false, true]);
        assert_eq!(classifier.classify(&scroll, &tips), Mode::Scroll);
        assert_eq!(classifier.classify(&point, &tips), Mode::Move);
    }

    #[test]
    fn mode_labels() {
        assert_eq!(Mode::DoublePinch.as_str(), "double-pinch");
        assert_eq!(Mode::Idle.to_string(), "idle");
        assert!(Mode::RightPinch.is_pinch());
        assert!(!Mode::Scroll.is_pinch());
    }
}
