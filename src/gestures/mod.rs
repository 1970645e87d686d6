pub mod arbiter;
pub mod classifier;
pub mod engine;
pub mod fingers;
pub mod motion;
pub mod stats;

pub use arbiter::{ActionArbiter, ActionEvent, ArbiterConfig, ArbiterState, FrameInput, MouseButton};
pub use classifier::{FingerTips, GestureClassifier, Mode};
pub use engine::{EngineConfig, GestureEngine};
pub use fingers::{classify_fingers, FingerStates};
pub use motion::{remap, Bounds, MotionFilter};
pub use stats::SessionStats;

/// Gesture cheat sheet shown when the controller starts.
pub const GESTURE_HELP: [&str; 5] = [
    "Move: index finger up",
    "Left click / drag: index + thumb pinch",
    "Right click: middle + thumb pinch",
    "Double click: ring + thumb pinch",
    "Scroll: index + middle up, move hand up or down",
];
