//! Error types for the gesture engine and its collaborators

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AirMouseError {
    #[error("invalid landmark frame: expected {expected} landmarks, got {actual}")]
    InvalidFrame { expected: usize, actual: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("fail-safe triggered: pointer at screen corner ({x}, {y})")]
    FailSafeTriggered { x: f32, y: f32 },
}

pub type Result<T> = std::result::Result<T, AirMouseError>;
