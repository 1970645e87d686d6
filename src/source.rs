//! Landmark input boundary.
//!
//! Hand detection runs outside this crate. Any estimator that can print one
//! JSON object per frame can drive the engine through [`ReplaySource`]:
//!
//! ```text
//! {"t_ms": 0, "hands": [[[320.0, 240.0], ...21 points]], "normalized": false}
//! {"t_ms": 33, "hands": []}
//! ```

use std::collections::VecDeque;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use serde::Deserialize;

use crate::landmarks::LandmarkFrame;

/// Frame period assumed when a line carries no timestamp.
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(33);

#[derive(Debug, Clone, PartialEq)]
pub struct FrameSample {
    /// First detected hand, `None` when no hand was seen.
    pub hand: Option<LandmarkFrame>,
    /// Capture time relative to the start of the stream.
    pub offset: Duration,
}

impl FrameSample {
    pub fn new(hand: Option<LandmarkFrame>, offset: Duration) -> Self {
        Self { hand, offset }
    }
}

pub trait LandmarkSource: Send {
    /// Next captured frame, or `None` once the stream is closed.
    fn next_frame(&mut self) -> anyhow::Result<Option<FrameSample>>;
}

impl<S: LandmarkSource + ?Sized> LandmarkSource for Box<S> {
    fn next_frame(&mut self) -> anyhow::Result<Option<FrameSample>> {
        (**self).next_frame()
    }
}

/// Plays back a fixed list of samples.
#[derive(Debug, Default, Clone)]
pub struct ScriptedSource {
    samples: VecDeque<FrameSample>,
}

impl ScriptedSource {
    pub fn new(samples: impl IntoIterator<Item = FrameSample>) -> Self {
        Self {
            samples: samples.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.samples.len()
    }
}

impl LandmarkSource for ScriptedSource {
    fn next_frame(&mut self) -> anyhow::Result<Option<FrameSample>> {
        Ok(self.samples.pop_front())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReplayOptions {
    pub camera_width: f32,
    pub camera_height: f32,
    /// Flip x around the camera width for estimators that do not mirror.
    pub mirror: bool,
    /// Treat coordinates as 0..1 when a line does not say.
    pub normalized: bool,
}

impl Default for ReplayOptions {
    fn default() -> Self {
        Self {
            camera_width: 640.0,
            camera_height: 480.0,
            mirror: false,
            normalized: false,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ReplayLine {
    #[serde(default)]
    t_ms: Option<u64>,
    #[serde(default)]
    hands: Vec<Vec<Coord>>,
    #[serde(default)]
    normalized: Option<bool>,
}

/// A landmark as `[x, y]` or `[x, y, z]`. Depth is dropped.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(untagged)]
enum Coord {
    Planar([f32; 2]),
    Spatial([f32; 3]),
}

impl Coord {
    fn xy(self) -> [f32; 2] {
        match self {
            Coord::Planar(xy) => xy,
            Coord::Spatial([x, y, _]) => [x, y],
        }
    }
}

/// Reads landmark frames as JSON lines from a file or stdin.
pub struct ReplaySource {
    reader: Box<dyn BufRead + Send>,
    options: ReplayOptions,
    line_no: usize,
    last_offset: Option<Duration>,
    buf: String,
}

impl ReplaySource {
    pub fn from_reader<R: BufRead + Send + 'static>(reader: R, options: ReplayOptions) -> Self {
        Self {
            reader: Box::new(reader),
            options,
            line_no: 0,
            last_offset: None,
            buf: String::new(),
        }
    }

    pub fn from_path<P: AsRef<Path>>(path: P, options: ReplayOptions) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
        Ok(Self::from_reader(BufReader::new(file), options))
    }

    pub fn stdin(options: ReplayOptions) -> Self {
        Self::from_reader(BufReader::new(io::stdin()), options)
    }

    /// `-` selects stdin, anything else is a file path.
    pub fn open(input: &str, options: ReplayOptions) -> anyhow::Result<Self> {
        if input == "-" {
            Ok(Self::stdin(options))
        } else {
            Self::from_path(input, options)
        }
    }

    pub fn line_no(&self) -> usize {
        self.line_no
    }

    fn parse_line(&mut self, line: &str) -> anyhow::Result<FrameSample> {
        let parsed: ReplayLine = serde_json::from_str(line)
            .with_context(|| format!("line {}: malformed landmark record", self.line_no))?;

        let offset = match parsed.t_ms {
            Some(ms) => Duration::from_millis(ms),
            None => self
                .last_offset
                .map_or(Duration::ZERO, |last| last + DEFAULT_FRAME_INTERVAL),
        };
        self.last_offset = Some(offset);

        if parsed.hands.len() > 1 {
            tracing::trace!(line = self.line_no, hands = parsed.hands.len(), "using first hand only");
        }
        let normalized = parsed.normalized.unwrap_or(self.options.normalized);
        let hand = parsed.hands.into_iter().next().map(|coords| {
            let points: Vec<[f32; 2]> = coords.into_iter().map(Coord::xy).collect();
            let frame = if normalized {
                LandmarkFrame::from_normalized(&points, self.options.camera_width, self.options.camera_height)
            } else {
                let points: Vec<(f32, f32)> = points.iter().map(|p| (p[0], p[1])).collect();
                LandmarkFrame::from_points(&points[..])
            };
            if self.options.mirror {
                frame.mirrored(self.options.camera_width)
            } else {
                frame
            }
        });

        Ok(FrameSample { hand, offset })
    }
}

impl LandmarkSource for ReplaySource {
    fn next_frame(&mut self) -> anyhow::Result<Option<FrameSample>> {
        loop {
            self.buf.clear();
            let read = self
                .reader
                .read_line(&mut self.buf)
                .with_context(|| format!("line {}: failed to read landmarks", self.line_no + 1))?;
            if read == 0 {
                return Ok(None);
            }
            self.line_no += 1;
            let line = std::mem::take(&mut self.buf);
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            let sample = self.parse_line(trimmed);
            self.buf = line;
            return sample.map(Some);
        }
    }
}
