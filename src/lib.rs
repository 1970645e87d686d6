pub mod cli;
pub mod controller;
pub mod error;
pub mod gestures;
pub mod input;
pub mod landmarks;
pub mod logging;
pub mod settings;
pub mod source;

pub use controller::ControlLoop;
pub use error::{AirMouseError, Result};
pub use gestures::{ActionEvent, EngineConfig, GestureEngine, Mode};
pub use landmarks::{LandmarkFrame, Point};
