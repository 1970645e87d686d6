use crate::landmarks::Point;

/// Axis-aligned rectangle in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl Bounds {
    pub fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Full rectangle anchored at the origin.
    pub fn from_size(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Shrink by `margin` on every side.
    pub fn inset(&self, margin: f32) -> Self {
        Self::new(
            self.min_x + margin,
            self.min_y + margin,
            self.max_x - margin,
            self.max_y - margin,
        )
    }

    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }
}

/// Map `point` linearly from `from` onto `to`, per axis. Points outside
/// `from` land outside `to`; clamping is up to the input sink.
pub fn remap(point: Point, from: Bounds, to: Bounds) -> Point {
    let tx = (point.x - from.min_x) / from.width();
    let ty = (point.y - from.min_y) / from.height();
    Point {
        x: to.min_x + tx * to.width(),
        y: to.min_y + ty * to.height(),
    }
}

/// Exponential smoothing of the pointer target in screen space.
///
/// The smoothed position only changes when [`MotionFilter::update`] is
/// called; between calls it stays frozen and resumes from there.
#[derive(Debug, Clone, PartialEq)]
pub struct MotionFilter {
    camera: Bounds,
    screen: Bounds,
    smoothing: f32,
    previous: Point,
}

impl MotionFilter {
    /// `camera` is the inset remap domain, `smoothing` is at least 1.
    pub fn new(camera: Bounds, screen: Bounds, smoothing: f32) -> Self {
        Self::with_previous(camera, screen, smoothing, Point::default())
    }

    pub fn with_previous(camera: Bounds, screen: Bounds, smoothing: f32, previous: Point) -> Self {
        Self {
            camera,
            screen,
            smoothing,
            previous,
        }
    }

    pub fn update(&mut self, raw_tip: Point) -> Point {
        let target = self.target(raw_tip);
        let smoothed = Point {
            x: self.previous.x + (target.x - self.previous.x) / self.smoothing,
            y: self.previous.y + (target.y - self.previous.y) / self.smoothing,
        };
        self.previous = smoothed;
        smoothed
    }

    /// Unsmoothed screen position for a raw fingertip pixel.
    pub fn target(&self, raw_tip: Point) -> Point {
        remap(raw_tip, self.camera, self.screen)
    }

    pub fn position(&self) -> Point {
        self.previous
    }

    pub fn smoothing(&self) -> f32 {
        self.smoothing
    }
}
