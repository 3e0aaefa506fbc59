//! Core sliding-car puzzle logic: coordinates and directions, car geometry,
//! and the board with its placement and movement rules.

mod board;
mod car;
mod coord;

pub use board::{Board, LegalMove, MoveError, PlacementError, MAX_CAR_LENGTH, MIN_CAR_LENGTH};
pub use car::{Car, CarName, StepError};
pub use coord::{Coord, Direction, Orientation, BOARD_SIZE, EXIT, EXIT_ROW};
