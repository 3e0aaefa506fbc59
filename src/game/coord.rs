use std::fmt;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: usize = 7;

/// Row whose right edge opens onto the exit.
pub const EXIT_ROW: i16 = 3;

/// The victory cell: one column beyond the last real column of the exit row.
/// It is a sentinel outside the addressable grid, reachable only by a
/// horizontal car sliding off the right edge of row [`EXIT_ROW`].
pub const EXIT: Coord = Coord {
    row: EXIT_ROW,
    col: BOARD_SIZE as i16,
};

/// A board cell as (row, col), row 0 at the top, col 0 on the left.
///
/// Coordinates are signed so that one-beyond cells (row -1, col 7) and the
/// exit sentinel stay representable without underflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: i16,
    pub col: i16,
}

impl Coord {
    pub const fn new(row: i16, col: i16) -> Self {
        Coord { row, col }
    }

    /// The neighboring cell one step away in the given direction.
    pub fn step(self, direction: Direction) -> Coord {
        match direction {
            Direction::Up => Coord::new(self.row - 1, self.col),
            Direction::Down => Coord::new(self.row + 1, self.col),
            Direction::Left => Coord::new(self.row, self.col - 1),
            Direction::Right => Coord::new(self.row, self.col + 1),
        }
    }

    /// Whether this cell lies inside the playable grid.
    pub fn in_grid(self) -> bool {
        let size = BOARD_SIZE as i16;
        self.row >= 0 && self.row < size && self.col >= 0 && self.col < size
    }

    /// Whether a car may slide onto this cell, bounds-wise: any grid cell,
    /// plus the exit sentinel.
    pub fn enterable(self) -> bool {
        self.in_grid() || self == EXIT
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A single-cell move direction, identified at the input boundary by the
/// move keys `u`, `d`, `l`, `r`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The geometric inverse: up<->down, left<->right.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Single-char move key.
    pub fn key(self) -> char {
        match self {
            Direction::Up => 'u',
            Direction::Down => 'd',
            Direction::Left => 'l',
            Direction::Right => 'r',
        }
    }

    /// Look up a direction by its move key. Only the lowercase keys are
    /// bound; capital letters stay free for car selection.
    pub fn from_key(key: char) -> Option<Direction> {
        match key {
            'u' => Some(Direction::Up),
            'd' => Some(Direction::Down),
            'l' => Some(Direction::Left),
            'r' => Some(Direction::Right),
            _ => None,
        }
    }

    /// Human-readable description of the step, paired with the key in
    /// candidate-move listings.
    pub fn description(self) -> &'static str {
        match self {
            Direction::Up => "one step up",
            Direction::Down => "one step down",
            Direction::Left => "one step left",
            Direction::Right => "one step right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        })
    }
}

/// The axis a car is locked to for its whole lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Vertical,
    Horizontal,
}

impl Orientation {
    /// The two directions a car of this orientation may use, backward end
    /// first (toward the anchor, then toward the tail).
    pub fn axis_directions(self) -> [Direction; 2] {
        match self {
            Orientation::Vertical => [Direction::Up, Direction::Down],
            Orientation::Horizontal => [Direction::Left, Direction::Right],
        }
    }

    /// Whether the direction runs along this axis.
    pub fn allows(self, direction: Direction) -> bool {
        match (self, direction) {
            (Orientation::Vertical, Direction::Up | Direction::Down) => true,
            (Orientation::Horizontal, Direction::Left | Direction::Right) => true,
            _ => false,
        }
    }
}
