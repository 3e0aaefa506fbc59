use std::fmt;

use super::{Car, CarName, Coord, Direction, StepError, BOARD_SIZE, EXIT};

/// Shortest car a board accepts.
pub const MIN_CAR_LENGTH: u8 = 2;
/// Longest car a board accepts.
pub const MAX_CAR_LENGTH: u8 = 4;

/// Why a car could not be placed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// Length outside [`MIN_CAR_LENGTH`]..=[`MAX_CAR_LENGTH`].
    BadLength,
    /// A car with this name is already on the board.
    DuplicateName,
    /// Part of the footprint falls outside the grid.
    OutOfBounds,
    /// Part of the footprint is already occupied.
    Occupied,
}

/// Why a single-step move was rejected. Every rejection leaves the board
/// exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// No car with that name is on the board.
    UnknownCar,
    /// The direction is orthogonal to the car's orientation.
    OffAxis,
    /// The step would leave the grid anywhere but through the exit.
    OutOfBounds,
    /// The moved-into cell is occupied by another car.
    Blocked,
}

/// One legal single-step move, as reported by [`Board::possible_moves`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegalMove {
    pub name: CarName,
    pub direction: Direction,
    pub description: &'static str,
}

/// A 7x7 sliding-car board.
///
/// The car records are authoritative for position and orientation; the cell
/// grid is a derived occupancy index kept in sync on every mutation. All
/// mutation goes through [`Board::add_car`] and [`Board::move_car`], both of
/// which check everything before touching anything: a failed call is a
/// guaranteed no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<CarName>; BOARD_SIZE]; BOARD_SIZE],
    cars: Vec<Car>,
}

impl Board {
    /// Create a new empty board.
    pub fn new() -> Self {
        Board {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
            cars: Vec::new(),
        }
    }

    /// Occupant of an in-grid cell. The exit sentinel has no grid entry, so
    /// a tail resting there leaves no marker.
    fn marker(&self, cell: Coord) -> Option<CarName> {
        if !cell.in_grid() {
            return None;
        }
        self.cells[cell.row as usize][cell.col as usize]
    }

    fn set_marker(&mut self, cell: Coord, value: Option<CarName>) {
        if cell.in_grid() {
            self.cells[cell.row as usize][cell.col as usize] = value;
        }
    }

    /// Validate a placement without mutating: length in [2, 4], name not
    /// already on the board, every footprint cell inside the grid (placement
    /// never straddles the exit) and currently empty.
    pub fn check_placement(&self, car: &Car) -> Result<(), PlacementError> {
        if car.length() < MIN_CAR_LENGTH || car.length() > MAX_CAR_LENGTH {
            return Err(PlacementError::BadLength);
        }
        if self.car(car.name()).is_some() {
            return Err(PlacementError::DuplicateName);
        }
        // Check the anchor first: the footprint walk below only stays in
        // i16 range for an in-grid anchor.
        if !car.anchor().in_grid() {
            return Err(PlacementError::OutOfBounds);
        }
        for cell in car.coordinates() {
            if !cell.in_grid() {
                return Err(PlacementError::OutOfBounds);
            }
            if self.marker(cell).is_some() {
                return Err(PlacementError::Occupied);
            }
        }
        Ok(())
    }

    /// Place a car: validates via [`Board::check_placement`], then writes the
    /// name into every footprint cell and records the car. The only primitive
    /// that introduces a car.
    pub fn add_car(&mut self, car: Car) -> Result<(), PlacementError> {
        self.check_placement(&car)?;
        for cell in car.coordinates() {
            self.set_marker(cell, Some(car.name()));
        }
        self.cars.push(car);
        Ok(())
    }

    /// Move the named car one cell in the given direction.
    ///
    /// The step is tried on a disposable copy first: the car itself rejects
    /// off-axis and out-of-bounds steps, then every cell of the new footprint
    /// must be free or part of the car's own old footprint. Only then is the
    /// index updated and the record replaced.
    pub fn move_car(&mut self, name: CarName, direction: Direction) -> Result<(), MoveError> {
        let index = self
            .cars
            .iter()
            .position(|car| car.name() == name)
            .ok_or(MoveError::UnknownCar)?;
        let car = self.cars[index];

        let mut moved = car;
        moved.step(direction).map_err(|error| match error {
            StepError::OffAxis => MoveError::OffAxis,
            StepError::OutOfBounds => MoveError::OutOfBounds,
        })?;

        for cell in moved.coordinates() {
            if self.marker(cell).is_some_and(|occupant| occupant != name) {
                return Err(MoveError::Blocked);
            }
        }

        // Checks done; the commit below cannot fail.
        for cell in car.coordinates() {
            self.set_marker(cell, None);
        }
        for cell in moved.coordinates() {
            self.set_marker(cell, Some(name));
        }
        self.cars[index] = moved;
        Ok(())
    }

    /// Apply the geometric inverse of `direction` via [`Board::move_car`].
    /// An ordinary move, subject to the same legality checks; it always
    /// succeeds when it exactly retraces a move just made.
    pub fn reverse_move_car(
        &mut self,
        name: CarName,
        direction: Direction,
    ) -> Result<(), MoveError> {
        self.move_car(name, direction.opposite())
    }

    /// The named car, if it is on the board.
    pub fn car(&self, name: CarName) -> Option<&Car> {
        self.cars.iter().find(|car| car.name() == name)
    }

    /// The car occupying the given cell, if any.
    pub fn car_at(&self, cell: Coord) -> Option<&Car> {
        let name = self.cell_content(cell)?;
        self.car(name)
    }

    /// All cars currently placed, in placement order.
    pub fn cars(&self) -> &[Car] {
        &self.cars
    }

    /// Every legal single-step move currently available, across all cars.
    ///
    /// Purely a read: each car's geometric candidates are filtered by a
    /// free-cell test on the one moved-into cell. Order across cars follows
    /// placement order and is not part of the contract.
    pub fn possible_moves(&self) -> Vec<LegalMove> {
        let mut moves = Vec::new();
        for car in &self.cars {
            for (direction, description) in car.possible_moves() {
                if let Some(target) = car.movement_requirement(direction) {
                    if self.marker(target).is_none() {
                        moves.push(LegalMove {
                            name: car.name(),
                            direction,
                            description,
                        });
                    }
                }
            }
        }
        moves
    }

    /// Occupant of a cell, `None` when empty. The exit sentinel always
    /// reports empty, even while a tail rests on it: it is outside placeable
    /// space. Cells outside the grid report empty as well.
    pub fn cell_content(&self, cell: Coord) -> Option<CarName> {
        if cell == EXIT {
            return None;
        }
        self.marker(cell)
    }

    /// Every coordinate of this board: all grid cells in row-major order,
    /// then the exit sentinel.
    pub fn cell_list(&self) -> Vec<Coord> {
        let size = BOARD_SIZE as i16;
        let mut cells = Vec::with_capacity(BOARD_SIZE * BOARD_SIZE + 1);
        for row in 0..size {
            for col in 0..size {
                cells.push(Coord::new(row, col));
            }
        }
        cells.push(EXIT);
        cells
    }

    /// The victory cell.
    pub fn target_location(&self) -> Coord {
        EXIT
    }

    /// Victory: the cell immediately left of the exit is occupied. Any car
    /// counts, and a car whose tail rests on the exit necessarily covers that
    /// cell too.
    pub fn is_solved(&self) -> bool {
        self.cell_content(EXIT.step(Direction::Left)).is_some()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    /// Rows of space-separated markers, `_` for empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = BOARD_SIZE as i16;
        for row in 0..size {
            for col in 0..size {
                if col > 0 {
                    write!(f, " ")?;
                }
                match self.cell_content(Coord::new(row, col)) {
                    Some(name) => write!(f, "{}", name.letter())?,
                    None => write!(f, "_")?,
                }
            }
            if row < size - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
