use std::fmt;

use super::{Coord, Direction, Orientation};

/// The fixed set of car names a board accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CarName {
    Yellow,
    Blue,
    Orange,
    White,
    Green,
    Red,
}

impl CarName {
    pub const ALL: [CarName; 6] = [
        CarName::Yellow,
        CarName::Blue,
        CarName::Orange,
        CarName::White,
        CarName::Green,
        CarName::Red,
    ];

    /// The single-letter marker used on the grid and in puzzle files.
    pub fn letter(self) -> char {
        match self {
            CarName::Yellow => 'Y',
            CarName::Blue => 'B',
            CarName::Orange => 'O',
            CarName::White => 'W',
            CarName::Green => 'G',
            CarName::Red => 'R',
        }
    }

    /// Parse a letter, either case. `None` for anything outside the set.
    pub fn from_letter(letter: char) -> Option<CarName> {
        match letter.to_ascii_uppercase() {
            'Y' => Some(CarName::Yellow),
            'B' => Some(CarName::Blue),
            'O' => Some(CarName::Orange),
            'W' => Some(CarName::White),
            'G' => Some(CarName::Green),
            'R' => Some(CarName::Red),
            _ => None,
        }
    }

    /// Parse a one-letter name string, as used for puzzle file keys. The
    /// file format is uppercase-only; the either-case lookup for key input
    /// is [`CarName::from_letter`].
    pub fn parse(name: &str) -> Option<CarName> {
        let mut chars = name.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) if letter.is_ascii_uppercase() => CarName::from_letter(letter),
            _ => None,
        }
    }
}

impl fmt::Display for CarName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Why a car refused a single-step translation on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepError {
    /// The direction is orthogonal to the car's orientation.
    OffAxis,
    /// The moved-into cell is neither a grid cell nor the exit.
    OutOfBounds,
}

/// A rigid car: fixed name, length, and orientation; mutable anchor.
///
/// The anchor is the minimal-coordinate cell of the footprint (topmost for
/// vertical cars, leftmost for horizontal cars); the footprint is `length`
/// contiguous cells from the anchor along the orientation axis.
///
/// A car knows nothing about other cars. It validates its own geometry
/// (axis lock and bounds); occupancy belongs to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Car {
    name: CarName,
    length: u8,
    anchor: Coord,
    orientation: Orientation,
}

impl Car {
    /// A car is constructed with all attributes explicit. Length is not
    /// validated here; the board rejects anything outside [2, 4] at
    /// placement, so a malformed car is constructible but unplaceable.
    pub fn new(name: CarName, length: u8, anchor: Coord, orientation: Orientation) -> Self {
        Car {
            name,
            length,
            anchor,
            orientation,
        }
    }

    pub fn name(&self) -> CarName {
        self.name
    }

    pub fn length(&self) -> u8 {
        self.length
    }

    pub fn anchor(&self) -> Coord {
        self.anchor
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The last footprint cell (bottommost or rightmost).
    pub fn tail(&self) -> Coord {
        let span = self.length as i16 - 1;
        match self.orientation {
            Orientation::Vertical => Coord::new(self.anchor.row + span, self.anchor.col),
            Orientation::Horizontal => Coord::new(self.anchor.row, self.anchor.col + span),
        }
    }

    /// The ordered footprint: `length` cells starting at the anchor and
    /// stepping along the orientation axis.
    pub fn coordinates(&self) -> Vec<Coord> {
        let [_, forward] = self.orientation.axis_directions();
        let mut cells = Vec::with_capacity(self.length as usize);
        let mut cell = self.anchor;
        for _ in 0..self.length {
            cells.push(cell);
            cell = cell.step(forward);
        }
        cells
    }

    /// Geometric candidate moves: on-axis directions whose moved-into cell
    /// stays in bounds (the exit counts as in bounds for motion). Occupancy
    /// by other cars is not consulted; that is the board's call.
    pub fn possible_moves(&self) -> Vec<(Direction, &'static str)> {
        self.orientation
            .axis_directions()
            .into_iter()
            .filter(|&direction| {
                self.movement_requirement(direction)
                    .is_some_and(|cell| cell.enterable())
            })
            .map(|direction| (direction, direction.description()))
            .collect()
    }

    /// The single cell that must be free for the given step: one before the
    /// anchor (up/left) or one past the tail (down/right). `None` when the
    /// direction is orthogonal to the orientation. Bounds are not checked
    /// here; [`Car::step`] and [`Car::possible_moves`] do that.
    pub fn movement_requirement(&self, direction: Direction) -> Option<Coord> {
        if !self.orientation.allows(direction) {
            return None;
        }
        let cell = match direction {
            Direction::Up | Direction::Left => self.anchor.step(direction),
            Direction::Down | Direction::Right => self.tail().step(direction),
        };
        Some(cell)
    }

    /// Translate the anchor one cell in the given direction, or refuse
    /// without mutating: off-axis directions and steps whose moved-into cell
    /// is out of bounds are rejected.
    pub fn step(&mut self, direction: Direction) -> Result<(), StepError> {
        let target = self
            .movement_requirement(direction)
            .ok_or(StepError::OffAxis)?;
        if !target.enterable() {
            return Err(StepError::OutOfBounds);
        }
        self.anchor = self.anchor.step(direction);
        Ok(())
    }
}
