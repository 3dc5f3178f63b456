use std::io;

use thiserror::Error;

/// Failures raised by the simulation core.
///
/// Game over is a normal terminal state and never shows up here.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum SimulationError {
    /// Every cell of the grid is occupied, so food has nowhere to go.
    #[error("no free cell left on the {width}x{height} grid")]
    GridExhausted { width: u16, height: u16 },
    /// The snake body lost its last segment.
    #[error("snake body is empty")]
    EmptyBody,
    #[error("start cell ({x}, {y}) lies outside the grid")]
    OriginOutOfBounds { x: i32, y: i32 },
}

/// Failures talking to the high-score service.
#[derive(Debug, Error)]
pub enum ScoreServiceError {
    #[error("score service request failed: {0}")]
    Transport(Box<ureq::Error>),
    #[error("score service returned an unreadable body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<ureq::Error> for ScoreServiceError {
    fn from(error: ureq::Error) -> Self {
        Self::Transport(Box::new(error))
    }
}

/// Top-level error returned from the binary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Simulation(#[from] SimulationError),
}
