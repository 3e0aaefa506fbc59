use std::path::PathBuf;

use crate::game::PlacementError;

/// Errors that can occur while loading a puzzle file and assembling its board.
#[derive(Debug, thiserror::Error)]
pub enum PuzzleError {
    #[error("failed to read puzzle file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse puzzle JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unknown car name {0:?} (expected one of Y, B, O, W, G, R)")]
    UnknownCar(String),

    #[error("car {name:?} has orientation {value} (expected 0 for vertical or 1 for horizontal)")]
    BadOrientation { name: String, value: u8 },

    #[error("car {name:?} cannot be placed: {reason:?}")]
    Placement {
        name: String,
        reason: PlacementError,
    },
}
