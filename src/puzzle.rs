use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::PuzzleError;
use crate::game::{Board, Car, CarName, Coord, Orientation};

/// Orientation code used by puzzle files: the car stands in a column.
pub const VERTICAL: u8 = 0;
/// Orientation code used by puzzle files: the car lies in a row.
pub const HORIZONTAL: u8 = 1;

/// One car as written in a puzzle file: `[length, [row, col], orientation]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarSpec(pub u8, pub (i16, i16), pub u8);

/// A puzzle definition: car placements keyed by uppercase car letter.
///
/// Serializes as a plain JSON object, e.g. `{"R": [2, [3, 0], 1]}`. Keys
/// are uppercase only; `"r"` is not a valid key. The map is ordered so
/// assembly walks entries in a stable order and reports the same failure
/// for the same file every time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Puzzle {
    cars: BTreeMap<String, CarSpec>,
}

impl Puzzle {
    /// Load a puzzle from a JSON file.
    pub fn load(path: &Path) -> Result<Self, PuzzleError> {
        let content = std::fs::read_to_string(path).map_err(|e| PuzzleError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json(&content)
    }

    /// Parse a puzzle from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, PuzzleError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Assemble a playable board from this definition.
    ///
    /// Every entry is validated on the way in: the name must be one of the
    /// six known letters, the orientation code 0 or 1, and the placement must
    /// pass the board's own length, bounds, and overlap checks.
    pub fn build_board(&self) -> Result<Board, PuzzleError> {
        let mut board = Board::new();
        for (name, spec) in &self.cars {
            let CarSpec(length, (row, col), orientation_code) = *spec;
            let car_name =
                CarName::parse(name).ok_or_else(|| PuzzleError::UnknownCar(name.clone()))?;
            let orientation = match orientation_code {
                VERTICAL => Orientation::Vertical,
                HORIZONTAL => Orientation::Horizontal,
                value => {
                    return Err(PuzzleError::BadOrientation {
                        name: name.clone(),
                        value,
                    })
                }
            };
            let car = Car::new(car_name, length, Coord::new(row, col), orientation);
            board.add_car(car).map_err(|reason| PuzzleError::Placement {
                name: name.clone(),
                reason,
            })?;
        }
        Ok(board)
    }

    /// The built-in starter layout, used when no puzzle file is given.
    pub fn builtin() -> Self {
        let mut cars = BTreeMap::new();
        cars.insert("R".to_string(), CarSpec(2, (3, 0), HORIZONTAL));
        cars.insert("O".to_string(), CarSpec(3, (1, 2), VERTICAL));
        cars.insert("B".to_string(), CarSpec(3, (0, 3), HORIZONTAL));
        cars.insert("G".to_string(), CarSpec(2, (4, 2), VERTICAL));
        cars.insert("W".to_string(), CarSpec(3, (2, 5), VERTICAL));
        cars.insert("Y".to_string(), CarSpec(2, (6, 3), HORIZONTAL));
        Puzzle { cars }
    }

    /// Number of cars in the definition.
    pub fn len(&self) -> usize {
        self.cars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, PlacementError};
    use std::io::Write;

    #[test]
    fn test_parse_puzzle_json() {
        let json = r#"{
            "R": [2, [3, 0], 1],
            "O": [3, [1, 2], 0]
        }"#;
        let puzzle = Puzzle::from_json(json).unwrap();
        assert_eq!(puzzle.len(), 2);

        let board = puzzle.build_board().unwrap();
        let red = board.car(CarName::Red).unwrap();
        assert_eq!(red.length(), 2);
        assert_eq!(red.anchor(), Coord::new(3, 0));
        assert_eq!(red.orientation(), Orientation::Horizontal);
        let orange = board.car(CarName::Orange).unwrap();
        assert_eq!(orange.orientation(), Orientation::Vertical);
    }

    #[test]
    fn test_serialized_form_is_the_file_format() {
        let mut cars = BTreeMap::new();
        cars.insert("Y".to_string(), CarSpec(2, (6, 3), HORIZONTAL));
        let puzzle = Puzzle { cars };
        let json = serde_json::to_string(&puzzle).unwrap();
        assert_eq!(json, r#"{"Y":[2,[6,3],1]}"#);
        assert_eq!(Puzzle::from_json(&json).unwrap(), puzzle);
    }

    #[test]
    fn test_rejects_unknown_name() {
        let json = r#"{"Q": [2, [0, 0], 1]}"#;
        let err = Puzzle::from_json(json).unwrap().build_board().unwrap_err();
        assert!(matches!(err, PuzzleError::UnknownCar(name) if name == "Q"));

        // Lowercase keys are not part of the file format.
        let json = r#"{"r": [2, [3, 0], 1]}"#;
        let err = Puzzle::from_json(json).unwrap().build_board().unwrap_err();
        assert!(matches!(err, PuzzleError::UnknownCar(name) if name == "r"));
    }

    #[test]
    fn test_rejects_bad_orientation() {
        let json = r#"{"R": [2, [0, 0], 2]}"#;
        let err = Puzzle::from_json(json).unwrap().build_board().unwrap_err();
        assert!(matches!(err, PuzzleError::BadOrientation { value: 2, .. }));
    }

    #[test]
    fn test_rejects_overlapping_cars_deterministically() {
        // "O" and "Y" collide; assembly walks names in order, places "O"
        // first, and reports the failure on "Y".
        let json = r#"{
            "Y": [2, [2, 2], 1],
            "O": [3, [1, 2], 0]
        }"#;
        let err = Puzzle::from_json(json).unwrap().build_board().unwrap_err();
        match err {
            PuzzleError::Placement { name, reason } => {
                assert_eq!(name, "Y");
                assert_eq!(reason, PlacementError::Occupied);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_rejects_length_one() {
        let json = r#"{"G": [1, [2, 2], 0]}"#;
        let err = Puzzle::from_json(json).unwrap().build_board().unwrap_err();
        assert!(matches!(
            err,
            PuzzleError::Placement {
                reason: PlacementError::BadLength,
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_placement_far_off_the_grid() {
        let json = r#"{"R": [2, [32767, 0], 0]}"#;
        let err = Puzzle::from_json(json).unwrap().build_board().unwrap_err();
        assert!(matches!(
            err,
            PuzzleError::Placement {
                reason: PlacementError::OutOfBounds,
                ..
            }
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Puzzle::load(Path::new("no_such_puzzle.json")).unwrap_err();
        assert!(matches!(err, PuzzleError::FileRead { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("puzzle.json");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, r#"{{"R": [2, [3, 4], 1]}}"#).unwrap();

        let puzzle = Puzzle::load(&path).unwrap();
        let mut board = puzzle.build_board().unwrap();
        assert!(!board.is_solved());
        assert_eq!(board.move_car(CarName::Red, Direction::Right), Ok(()));
        assert!(board.is_solved());
    }

    #[test]
    fn test_builtin_is_well_formed() {
        let puzzle = Puzzle::builtin();
        assert_eq!(puzzle.len(), 6);
        assert!(!puzzle.is_empty());

        let board = puzzle.build_board().unwrap();
        assert_eq!(board.cars().len(), 6);
        assert!(!board.is_solved());
        assert!(!board.possible_moves().is_empty());
    }

    #[test]
    fn test_builtin_is_solvable() {
        let mut board = Puzzle::builtin().build_board().unwrap();
        let script = [
            (CarName::Orange, Direction::Up),
            (CarName::White, Direction::Down),
            (CarName::White, Direction::Down),
            (CarName::Red, Direction::Right),
            (CarName::Red, Direction::Right),
            (CarName::Red, Direction::Right),
            (CarName::Red, Direction::Right),
            (CarName::Red, Direction::Right),
        ];
        for (name, direction) in script {
            assert_eq!(board.move_car(name, direction), Ok(()));
        }
        assert!(board.is_solved());
    }
}
