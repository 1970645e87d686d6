use crate::error::{AirMouseError, Result};
use crate::landmarks::{Finger, LandmarkFrame, LANDMARK_COUNT};

/// Which digits read as extended in a single frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FingerStates {
    pub thumb: bool,
    pub index: bool,
    pub middle: bool,
    pub ring: bool,
    pub pinky: bool,
}

impl FingerStates {
    pub fn is_up(&self, finger: Finger) -> bool {
        match finger {
            Finger::Thumb => self.thumb,
            Finger::Index => self.index,
            Finger::Middle => self.middle,
            Finger::Ring => self.ring,
            Finger::Pinky => self.pinky,
        }
    }

    pub fn count_up(&self) -> usize {
        Finger::ALL.iter().filter(|f| self.is_up(**f)).count()
    }

    pub fn as_array(&self) -> [bool; 5] {
        [self.thumb, self.index, self.middle, self.ring, self.pinky]
    }
}

impl From<[bool; 5]> for FingerStates {
    fn from(value: [bool; 5]) -> Self {
        Self {
            thumb: value[0],
            index: value[1],
            middle: value[2],
            ring: value[3],
            pinky: value[4],
        }
    }
}

/// Derive the extended flag for every digit.
///
/// The thumb flexes sideways, so it is extended when its tip lies to the
/// right of the IP joint. The other digits are extended when the tip sits
/// strictly above the PIP joint (image y grows downward). Rolling the hand
/// is tolerated, rotating it past roughly 90 degrees is not, and a left hand
/// reads the thumb inverted since handedness is not detected.
pub fn classify_fingers(frame: &LandmarkFrame) -> Result<FingerStates> {
    if !frame.is_complete() {
        return Err(AirMouseError::InvalidFrame {
            expected: LANDMARK_COUNT,
            actual: frame.len(),
        });
    }

    let thumb_tip = Finger::Thumb.tip();
    let thumb = frame.at(thumb_tip).x > frame.at(thumb_tip - 1).x;

    let up = |finger: Finger| {
        let tip = finger.tip();
        frame.at(tip).y < frame.at(tip - 2).y
    };

    Ok(FingerStates {
        thumb,
        index: up(Finger::Index),
        middle: up(Finger::Middle),
        ring: up(Finger::Ring),
        pinky: up(Finger::Pinky),
    })
}
