//! Hand landmark frames as produced by the external pose estimator.
//!
//! A frame holds the 21 MediaPipe hand landmarks in pixel space. Index 0 is
//! the wrist, then four joints per digit from the base to the tip.

use serde::{Deserialize, Serialize};

pub const LANDMARK_COUNT: usize = 21;

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f32 {
        ((other.x - self.x).powi(2) + (other.y - self.y).powi(2)).sqrt()
    }
}

impl From<(f32, f32)> for Point {
    fn from(value: (f32, f32)) -> Self {
        Self {
            x: value.0,
            y: value.1,
        }
    }
}

/// The five digits in landmark order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Finger {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    pub const ALL: [Finger; 5] = [
        Finger::Thumb,
        Finger::Index,
        Finger::Middle,
        Finger::Ring,
        Finger::Pinky,
    ];

    pub fn tip(self) -> usize {
        match self {
            Finger::Thumb => THUMB_TIP,
            Finger::Index => INDEX_TIP,
            Finger::Middle => MIDDLE_TIP,
            Finger::Ring => RING_TIP,
            Finger::Pinky => PINKY_TIP,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Finger::Thumb => "thumb",
            Finger::Index => "index",
            Finger::Middle => "middle",
            Finger::Ring => "ring",
            Finger::Pinky => "pinky",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Landmark {
    pub id: usize,
    pub position: Point,
}

/// One detected hand. Built fresh every frame and never mutated by the engine.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LandmarkFrame {
    landmarks: Vec<Landmark>,
}

impl LandmarkFrame {
    pub fn new(landmarks: Vec<Landmark>) -> Self {
        Self { landmarks }
    }

    /// Build a frame from pixel positions, assigning ids by order.
    pub fn from_points<P: Into<Point> + Copy>(points: &[P]) -> Self {
        let landmarks = points
            .iter()
            .enumerate()
            .map(|(id, p)| Landmark {
                id,
                position: (*p).into(),
            })
            .collect();
        Self { landmarks }
    }

    /// Scale estimator output in the `0..1` range to pixel coordinates.
    pub fn from_normalized(points: &[[f32; 2]], width: f32, height: f32) -> Self {
        let landmarks = points
            .iter()
            .enumerate()
            .map(|(id, p)| Landmark {
                id,
                position: Point::new(p[0] * width, p[1] * height),
            })
            .collect();
        Self { landmarks }
    }

    /// Flip horizontally inside a frame of the given width.
    pub fn mirrored(&self, width: f32) -> Self {
        let landmarks = self
            .landmarks
            .iter()
            .map(|lm| Landmark {
                id: lm.id,
                position: Point::new(width - lm.position.x, lm.position.y),
            })
            .collect();
        Self { landmarks }
    }

    pub fn len(&self) -> usize {
        self.landmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.landmarks.len() == LANDMARK_COUNT
    }

    pub fn landmarks(&self) -> &[Landmark] {
        &self.landmarks
    }

    pub fn get(&self, id: usize) -> Option<Point> {
        self.landmarks.get(id).map(|lm| lm.position)
    }

    /// Position of a landmark in a frame already checked by [`Self::is_complete`].
    pub(crate) fn at(&self, id: usize) -> Point {
        self.landmarks[id].position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_points_scale_to_camera_pixels() {
        let frame = LandmarkFrame::from_normalized(&[[0.5, 0.25], [1.0, 1.0]], 640.0, 480.0);
        assert_eq!(frame.get(0), Some(Point::new(320.0, 120.0)));
        assert_eq!(frame.get(1), Some(Point::new(640.0, 480.0)));
        assert_eq!(frame.landmarks()[1].id, 1);
    }

    #[test]
    fn mirroring_flips_x_only() {
        let frame = LandmarkFrame::from_points(&[(100.0_f32, 40.0_f32)][..]);
        let flipped = frame.mirrored(640.0);
        assert_eq!(flipped.get(0), Some(Point::new(540.0, 40.0)));
    }

    #[test]
    fn finger_tips_follow_landmark_layout() {
        let tips: Vec<usize> = Finger::ALL.iter().map(|f| f.tip()).collect();
        assert_eq!(tips, vec![4, 8, 12, 16, 20]);
        assert_eq!(Finger::Pinky.as_str(), "pinky");
    }
}
